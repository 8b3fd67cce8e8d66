//! Color decision for terminal output

use std::io::IsTerminal;

/// Whether output should be colored, given the `--no-color` flag and the
/// `display.color` setting, consulting the process environment and stdout.
pub fn use_color(no_color: bool, config_color: bool) -> bool {
    resolve(
        no_color || !config_color,
        |name| std::env::var(name).ok(),
        || std::io::stdout().is_terminal(),
    )
}

/// Opt-outs (flag, config, `NO_COLOR`, `URGENT_REMINDER_NO_COLOR=1`) always
/// win. Otherwise `CLICOLOR_FORCE` forces color, `CLICOLOR=0` disables it,
/// and the TTY check decides.
fn resolve<E, T>(opted_out: bool, env: E, is_tty: T) -> bool
where
    E: Fn(&str) -> Option<String>,
    T: FnOnce() -> bool,
{
    if opted_out
        || env("NO_COLOR").is_some()
        || env("URGENT_REMINDER_NO_COLOR").as_deref() == Some("1")
    {
        return false;
    }

    match (env("CLICOLOR_FORCE").as_deref(), env("CLICOLOR").as_deref()) {
        (Some(force), _) if force != "0" => true,
        (_, Some("0")) => false,
        _ => is_tty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn decide(vars: &[(&str, &str)], tty: bool) -> bool {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve(false, |name| vars.get(name).cloned(), || tty)
    }

    #[test]
    fn test_tty_decides_by_default() {
        assert!(decide(&[], true));
        assert!(!decide(&[], false));
    }

    #[test]
    fn test_no_color_disables() {
        assert!(!decide(&[("NO_COLOR", "")], true));
        assert!(!decide(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")], true));
    }

    #[test]
    fn test_tool_opt_out_disables() {
        assert!(!decide(
            &[("URGENT_REMINDER_NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")],
            true
        ));
        assert!(decide(&[("URGENT_REMINDER_NO_COLOR", "0")], true));
    }

    #[test]
    fn test_clicolor_force() {
        assert!(decide(&[("CLICOLOR_FORCE", "1")], false));
        assert!(!decide(&[("CLICOLOR_FORCE", "0")], false));
        assert!(decide(&[("CLICOLOR_FORCE", "1"), ("CLICOLOR", "0")], false));
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(!decide(&[("CLICOLOR", "0")], true));
        assert!(decide(&[("CLICOLOR", "1")], true));
    }

    #[test]
    fn test_flag_or_config_opt_out_beats_force() {
        let force = |name: &str| (name == "CLICOLOR_FORCE").then(|| "1".to_string());
        assert!(!resolve(true, force, || true));
        assert!(resolve(false, force, || false));
    }
}
