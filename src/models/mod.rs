//! Data models module
//!
//! Defines the persisted reminder record together with its closed
//! enumerations (Weekday, RecurrenceRule) and due/overdue predicates.

pub mod formats;
pub mod reminder;

pub use reminder::{RecurrenceRule, Reminder, Weekday};
