//! Reminder persistence module
//!
//! The whole collection is one document: every operation loads it, mutates
//! it in memory and writes it back. There is no cross-process locking, so
//! concurrent invocations race and the last writer wins.

mod json;
mod legacy;

pub use json::JsonStore;

use crate::error::{ReminderError, Result};
use crate::models::Reminder;

/// Narrow storage seam used by the service layer
pub trait ReminderRepository {
    /// Read the full collection (empty when nothing has been stored yet)
    fn load(&self) -> Result<Vec<Reminder>>;

    /// Replace the full collection
    fn save(&self, reminders: &[Reminder]) -> Result<()>;

    /// Load, apply `change`, then save. Nothing is written when `change` fails.
    fn modify<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Reminder>) -> Result<T>,
    {
        let mut reminders = self.load()?;
        let out = change(&mut reminders)?;
        self.save(&reminders)?;
        Ok(out)
    }

    fn add(&self, reminder: Reminder) -> Result<()> {
        self.modify(|reminders| {
            reminders.push(reminder);
            Ok(())
        })
    }

    /// Replace the first entry whose ID matches
    fn update(&self, id: u32, updated: Reminder) -> Result<()> {
        self.modify(|reminders| {
            let slot = reminders
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(ReminderError::NotFound(id))?;
            *slot = updated;
            Ok(())
        })
    }

    fn delete(&self, id: u32) -> Result<()> {
        self.modify(|reminders| {
            let before = reminders.len();
            reminders.retain(|r| r.id != id);
            if reminders.len() == before {
                return Err(ReminderError::NotFound(id));
            }
            Ok(())
        })
    }

    /// `max(existing IDs) + 1`, or 1 for an empty collection. Fails once the
    /// highest ID is `u32::MAX` instead of wrapping to an ID already in use.
    fn next_id(&self) -> Result<u32> {
        let reminders = self.load()?;
        match reminders.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ReminderError::Validation(format!("no reminder ID available after {}", max))
            }),
        }
    }
}
