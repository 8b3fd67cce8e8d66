//! Reminder service
//!
//! Orchestrates the store and the recurrence calculator. Nothing is cached
//! between calls; each operation reloads the collection.

use chrono::{Local, NaiveDate, NaiveDateTime};
use log::debug;

use crate::error::{ReminderError, Result};
use crate::models::Reminder;
use crate::recurrence;
use crate::store::ReminderRepository;

/// What completing a reminder did to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Recurring reminder moved to its next due date
    Advanced(NaiveDate),
    /// One-off reminder removed
    Completed,
}

pub struct ReminderService<R> {
    store: R,
}

impl<R: ReminderRepository> ReminderService<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn add(&self, reminder: Reminder) -> Result<()> {
        self.store.add(reminder)
    }

    pub fn list_all(&self) -> Result<Vec<Reminder>> {
        self.store.load()
    }

    /// Reminders due right now
    pub fn due(&self) -> Result<Vec<Reminder>> {
        self.due_at(Local::now().naive_local())
    }

    pub fn due_at(&self, now: NaiveDateTime) -> Result<Vec<Reminder>> {
        let reminders = self.store.load()?;
        Ok(reminders.into_iter().filter(|r| r.is_due_at(now)).collect())
    }

    pub fn get(&self, id: u32) -> Result<Reminder> {
        self.store
            .load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(ReminderError::NotFound(id))
    }

    /// Complete a reminder now
    pub fn check(&self, id: u32) -> Result<CheckOutcome> {
        self.check_at(id, Local::now().naive_local())
    }

    /// Complete a reminder: recurring ones advance, one-off ones are deleted
    pub fn check_at(&self, id: u32, now: NaiveDateTime) -> Result<CheckOutcome> {
        let mut reminder = self.get(id)?;

        if !reminder.is_recurrent {
            self.store.delete(id)?;
            debug!("Completed reminder {}", id);
            return Ok(CheckOutcome::Completed);
        }

        let next = recurrence::next_due_date(&reminder, now)?;
        reminder.due_date = next;
        self.store.update(id, reminder)?;
        debug!("Advanced reminder {} to {}", id, next);
        Ok(CheckOutcome::Advanced(next))
    }

    pub fn next_id(&self) -> Result<u32> {
        self.store.next_id()
    }
}
