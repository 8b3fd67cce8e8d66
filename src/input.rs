//! Input-boundary validation
//!
//! Everything typed by the user passes through here before a reminder is
//! built, so the core never sees an empty title or a malformed date.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ReminderError, Result};
use crate::models::{RecurrenceRule, Weekday};

pub fn title(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ReminderError::Validation("title cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// `YYYY-MM-DD`
pub fn date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ReminderError::Validation(format!(
            "invalid date '{}', use YYYY-MM-DD",
            raw.trim()
        ))
    })
}

/// Optional `HH:MM`; blank input means no time
pub fn time(raw: &str) -> Result<Option<NaiveTime>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(Some)
        .map_err(|_| ReminderError::Validation(format!("invalid time '{}', use HH:MM", trimmed)))
}

pub fn day_of_month(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(ReminderError::Validation(format!(
            "invalid day of month '{}', enter a number between 1 and 31",
            raw.trim()
        ))),
    }
}

pub fn recurrence_rule(raw: &str) -> Result<RecurrenceRule> {
    raw.parse().map_err(ReminderError::Validation)
}

/// Comma-separated weekdays, e.g. `Mon,Wed,Fri`. Duplicates collapse and
/// the result is ordered Monday first.
pub fn weekdays(raw: &str) -> Result<Vec<Weekday>> {
    let mut days = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Weekday>().map_err(ReminderError::Validation))
        .collect::<Result<Vec<_>>>()?;
    days.sort();
    days.dedup();
    Ok(days)
}
