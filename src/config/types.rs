use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reminder tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding reminders.json (defaults to the XDG data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Display settings
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Colored output (still subject to NO_COLOR and TTY detection)
    pub color: bool,

    /// Print the "URGENT REMINDERS" heading above `list`
    pub banner: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_dir, None);
        assert!(config.display.color);
        assert!(config.display.banner);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/reminders")),
            ..Config::default()
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.data_dir, Some(PathBuf::from("/srv/reminders")));
        assert!(parsed.display.banner);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("[display]\ncolor = false\n").unwrap();
        assert_eq!(parsed.data_dir, None);
        assert!(!parsed.display.color);
        assert!(parsed.display.banner);
    }
}
