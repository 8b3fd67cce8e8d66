use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{legacy, ReminderRepository};
use crate::error::{ReminderError, Result};
use crate::models::Reminder;

/// Reminder collection stored as a single pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the reminders document
    pub fn data_path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        self.path.with_extension("legacy.json")
    }

    /// Upgrade a legacy document, keeping a copy of the original beside it
    fn migrate(&self, content: &str, old: Vec<legacy::LegacyReminder>) -> Result<Vec<Reminder>> {
        let backup = self.backup_path();
        fs::write(&backup, content)?;
        info!("Backed up legacy reminders to {}", backup.display());

        let migrated = legacy::migrate(old);
        self.save(&migrated)?;
        info!(
            "Migrated {} legacy reminder(s) in {}",
            migrated.len(),
            self.path.display()
        );
        Ok(migrated)
    }
}

impl ReminderRepository for JsonStore {
    fn load(&self) -> Result<Vec<Reminder>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No reminders file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let current_err = match serde_json::from_str::<Vec<Reminder>>(&content) {
            Ok(reminders) => {
                debug!(
                    "Loaded {} reminder(s) from {}",
                    reminders.len(),
                    self.path.display()
                );
                return Ok(reminders);
            }
            Err(e) => e,
        };

        match legacy::parse(&content) {
            Ok(old) => self.migrate(&content, old),
            Err(legacy_err) => {
                warn!(
                    "{} matches neither the current nor the legacy format ({})",
                    self.path.display(),
                    legacy_err
                );
                Err(ReminderError::Parse(format!(
                    "{}: {}",
                    self.path.display(),
                    current_err
                )))
            }
        }
    }

    fn save(&self, reminders: &[Reminder]) -> Result<()> {
        let json = serde_json::to_string_pretty(reminders)?;

        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target, then swap it in
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            "Saved {} reminder(s) to {}",
            reminders.len(),
            self.path.display()
        );
        Ok(())
    }
}
