use clap::ValueEnum;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::Context;
use crate::config;
use crate::error::Result;

const FUNCTION_NAME: &str = "urgent_reminder_list";

const INTEGRATION: &str = r#"# Urgent Reminder Integration
urgent_reminder_list() {
    if command -v urgent-reminder &>/dev/null; then
        urgent-reminder list 2>/dev/null | grep -q "Total:" && urgent-reminder list
    fi
}
urgent_reminder_list
"#;

/// Shells with a supported startup profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Zsh,
    Bash,
}

impl Shell {
    pub fn name(self) -> &'static str {
        match self {
            Shell::Zsh => "zsh",
            Shell::Bash => "bash",
        }
    }

    pub fn profile(self, home: &Path) -> PathBuf {
        home.join(format!(".{}rc", self.name()))
    }

    /// zsh when `$SHELL` says so or a ~/.zshrc already exists, bash otherwise
    pub fn detect(shell_var: Option<&str>, home: &Path) -> Self {
        if shell_var.is_some_and(|s| s.contains("zsh")) || Shell::Zsh.profile(home).exists() {
            Shell::Zsh
        } else {
            Shell::Bash
        }
    }
}

/// Text to append to a profile, or `None` when the integration is already there
pub fn integration_for(existing: &str) -> Option<String> {
    if existing.contains(FUNCTION_NAME) {
        return None;
    }
    if !existing.is_empty() && !existing.ends_with('\n') {
        return Some(format!("\n{}", INTEGRATION));
    }
    Some(INTEGRATION.to_string())
}

/// Append the shell integration that lists due reminders in new terminals
pub fn run(ctx: &Context, shell: Option<Shell>) -> Result<()> {
    let printer = &ctx.printer;
    let home = config::home_dir()?;
    let shell =
        shell.unwrap_or_else(|| Shell::detect(std::env::var("SHELL").ok().as_deref(), &home));
    let profile = shell.profile(&home);

    printer.info(&format!("Detected shell: {}", shell.name()));
    printer.info(&format!("Config file: {}", profile.display()));
    printer.empty();

    let existing = match fs::read_to_string(&profile) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let Some(integration) = integration_for(&existing) else {
        printer.warning("Shell integration already configured!");
        printer.empty();
        printer.info(&format!(
            "The {} function is already in your shell config.",
            FUNCTION_NAME
        ));
        print_reload_hint(ctx, shell);
        return Ok(());
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&profile)?;
    file.write_all(integration.as_bytes())?;
    debug!("Appended shell integration to {}", profile.display());

    printer.success("✓ Shell integration configured successfully!");
    printer.empty();
    printer.info(&format!(
        "The {} function has been added to your shell config.",
        FUNCTION_NAME
    ));
    print_reload_hint(ctx, shell);
    printer.empty();
    printer.info("This will automatically run 'urgent-reminder list' in new terminals.");
    Ok(())
}

fn print_reload_hint(ctx: &Context, shell: Shell) {
    ctx.printer.empty();
    ctx.printer.info("To apply changes:");
    ctx.printer.info(&format!("  source ~/.{}rc", shell.name()));
    ctx.printer.info("  # or restart your terminal");
}
