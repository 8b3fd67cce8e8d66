//! Configuration module
//!
//! Handles the optional config.toml and resolves where reminders live.
//! Defines Config and Display types.

mod types;

pub use types::Config;

use crate::error::{ReminderError, Result};
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "urgent-reminder";
pub const REMINDERS_FILE: &str = "reminders.json";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file; a missing file yields defaults
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ReminderError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ReminderError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// `$XDG_CONFIG_HOME/urgent-reminder/config.toml`, or under `~/.config`
pub fn default_path() -> Result<PathBuf> {
    Ok(xdg_dir("XDG_CONFIG_HOME", ".config")?
        .join(APP_NAME)
        .join(CONFIG_FILE))
}

/// Directory holding the reminders document
pub fn data_dir(config: &Config) -> Result<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(xdg_dir("XDG_DATA_HOME", ".local/share")?.join(APP_NAME)),
    }
}

/// Full path of reminders.json
pub fn data_file(config: &Config) -> Result<PathBuf> {
    Ok(data_dir(config)?.join(REMINDERS_FILE))
}

pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| ReminderError::Config("Cannot determine home directory".to_string()))
}

fn xdg_dir(var: &str, fallback: &str) -> Result<PathBuf> {
    match env::var_os(var) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Ok(home_dir()?.join(fallback)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_is_default() {
        let config = load(Path::new("/nonexistent/urgent-reminder/config.toml")).unwrap();
        assert_eq!(config.data_dir, None);
        assert!(config.display.color);
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "display = [").unwrap();

        let result = load(&config_path);
        assert!(matches!(result, Err(ReminderError::TomlParse(_))));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/config.toml");

        save(&Config::default(), &config_path).unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        let mut config = Config::default();
        config.data_dir = Some(temp.path().join("data"));
        config.display.banner = false;

        save(&config, &config_path).unwrap();
        let loaded = load(&config_path).unwrap();

        assert_eq!(loaded.data_dir, Some(temp.path().join("data")));
        assert!(!loaded.display.banner);
    }

    #[test]
    #[serial]
    fn test_data_dir_prefers_config_then_xdg() {
        let temp = TempDir::new().unwrap();
        env::set_var("XDG_DATA_HOME", temp.path());

        let config = Config::default();
        assert_eq!(data_dir(&config).unwrap(), temp.path().join(APP_NAME));
        assert_eq!(
            data_file(&config).unwrap(),
            temp.path().join(APP_NAME).join(REMINDERS_FILE)
        );

        let config = Config {
            data_dir: Some(PathBuf::from("/custom/place")),
            ..Config::default()
        };
        assert_eq!(data_dir(&config).unwrap(), PathBuf::from("/custom/place"));

        env::remove_var("XDG_DATA_HOME");
    }

    #[test]
    #[serial]
    fn test_empty_xdg_falls_back_to_home() {
        env::set_var("XDG_CONFIG_HOME", "");
        let path = default_path().unwrap();
        assert!(path.ends_with(".config/urgent-reminder/config.toml"));
        env::remove_var("XDG_CONFIG_HOME");
    }
}
