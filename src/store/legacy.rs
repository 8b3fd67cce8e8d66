use chrono::{DateTime, Local, NaiveDate};
use serde::Deserialize;

use crate::models::formats::calendar_date;
use crate::models::Reminder;

/// Reminder as written by early releases (string IDs, alert flag)
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyReminder {
    #[allow(dead_code)]
    pub id: String,
    pub description: String,
    #[serde(with = "calendar_date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    #[allow(dead_code)]
    pub alert_enabled: bool,
    /// Some early files omit it; those records are stamped at migration time
    #[serde(default = "Local::now")]
    pub created_at: DateTime<Local>,
}

/// Parse `content` strictly as a legacy document
pub fn parse(content: &str) -> serde_json::Result<Vec<LegacyReminder>> {
    serde_json::from_str(content)
}

/// Convert legacy records into one-off reminders with fresh sequential IDs
/// (1, 2, ... in document order). The alert flag is dropped.
pub fn migrate(legacy: Vec<LegacyReminder>) -> Vec<Reminder> {
    legacy
        .into_iter()
        .zip(1..)
        .map(|(old, id)| Reminder {
            created_at: old.created_at,
            ..Reminder::new(id, old.description, old.due_date)
        })
        .collect()
}
