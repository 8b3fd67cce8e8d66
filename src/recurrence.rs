//! Recurrence calculator
//!
//! Computes the next due date of a recurring reminder relative to "now".
//! Only the calendar date is produced; the reminder's time of day is left
//! to the caller and never changes.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};

use crate::error::{ReminderError, Result};
use crate::models::{RecurrenceRule, Reminder, Weekday};

/// Next due date for `reminder`, computed from the local instant `now`
pub fn next_due_date(reminder: &Reminder, now: NaiveDateTime) -> Result<NaiveDate> {
    let today = now.date();

    let next = match reminder.recurrence_rule {
        Some(RecurrenceRule::Weekly) => next_weekly(&reminder.recurrence_days, today),
        Some(RecurrenceRule::BiWeekly) => next_bi_weekly(&reminder.recurrence_days, today),
        Some(RecurrenceRule::Monthly) => {
            next_monthly(reminder.recurrence_day_of_month.unwrap_or(1), now)
        }
        None => today.checked_add_months(Months::new(12)),
    };

    next.ok_or_else(|| {
        ReminderError::Schedule(format!(
            "no representable date follows {} for reminder {}",
            today, reminder.id
        ))
    })
}

/// Nearest selected weekday strictly after `today`, or a week out when none are selected
pub fn next_weekly(days: &[Weekday], today: NaiveDate) -> Option<NaiveDate> {
    let current = today.weekday().num_days_from_monday();

    let offset = days
        .iter()
        .map(|day| match (day.number_from_monday() + 7 - current) % 7 {
            0 => 7,
            n => n,
        })
        .min()
        .unwrap_or(7);

    today.checked_add_days(Days::new(u64::from(offset)))
}

/// The weekly result pushed out by one more week
///
/// No anchor date is tracked, so a late check shifts the cadence.
pub fn next_bi_weekly(days: &[Weekday], today: NaiveDate) -> Option<NaiveDate> {
    next_weekly(days, today)?.checked_add_days(Days::new(7))
}

/// First occurrence of `day_of_month` (clamped to each month's length) strictly after `now`
pub fn next_monthly(day_of_month: u32, now: NaiveDateTime) -> Option<NaiveDate> {
    let target = if (1..=31).contains(&day_of_month) {
        day_of_month
    } else {
        1
    };

    let mut year = now.year();
    let mut month = now.month();

    // At most two iterations: the current month, then the next one.
    loop {
        let day = target.min(days_in_month(year, month)?);
        let candidate = NaiveDate::from_ymd_opt(year, month, day)?;

        if candidate.and_time(chrono::NaiveTime::MIN) > now {
            return Some(candidate);
        }

        if month == 12 {
            month = 1;
            year = year.checked_add(1)?;
        } else {
            month += 1;
        }
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = first.checked_add_months(Months::new(1))?;
    Some(next_first.signed_duration_since(first).num_days() as u32)
}
