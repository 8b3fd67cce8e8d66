//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - add: Add a reminder (interactive or from flags)
//! - list: Show due reminders
//! - check: Complete a reminder
//! - config list / config init: Inspect and create configuration
//! - setup: Install shell integration
pub mod add;
pub mod check;
pub mod config;
pub mod list;
pub mod setup;

use std::path::PathBuf;

use crate::config::{self as app_config, Config};
use crate::display::Printer;
use crate::error::Result;
use crate::service::ReminderService;
use crate::store::JsonStore;

/// Settings shared by every command invocation
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub printer: Printer,
}

impl Context {
    pub fn load(config_path: Option<PathBuf>, no_color: bool) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => app_config::default_path()?,
        };
        let config = app_config::load(&config_path)?;
        let printer = Printer::new(no_color, &config);

        Ok(Self {
            config,
            config_path,
            printer,
        })
    }

    pub fn service(&self) -> Result<ReminderService<JsonStore>> {
        let store = JsonStore::new(app_config::data_file(&self.config)?);
        Ok(ReminderService::new(store))
    }
}
