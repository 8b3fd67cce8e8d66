//! Terminal display module
//!
//! Colored status lines and the due-reminder listing, with automatic
//! TTY detection.

mod formatter;
mod terminal;

pub use formatter::print_markdown;

use termimad::crossterm::style::Stylize;

use crate::config::Config;
use crate::models::Reminder;

const SEPARATOR_WIDTH: usize = 60;

/// Writes user-facing output, colored when the terminal allows it
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(no_color: bool, config: &Config) -> Self {
        Self {
            color: terminal::use_color(no_color, config.display.color),
        }
    }

    pub fn success(&self, message: &str) {
        if self.color {
            println!("{}", message.green());
        } else {
            println!("{}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.color {
            println!("{}", message.blue());
        } else {
            println!("{}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.color {
            println!("{}", message.yellow());
        } else {
            println!("{}", message);
        }
    }

    pub fn empty(&self) {
        println!();
    }

    pub fn header(&self, text: &str) {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        println!("{}", separator);
        println!("{}", text);
        println!("{}", separator);
    }

    pub fn banner(&self) {
        print_markdown("# URGENT REMINDERS", self.color);
    }

    /// One line per reminder; overdue ones stand out in red
    pub fn reminder(&self, reminder: &Reminder, overdue: bool) {
        let line = reminder_line(reminder);
        if self.color && overdue {
            println!("{}", line.red().bold());
        } else {
            println!("{}", line);
        }
    }
}

/// `[id] title -- YYYY-MM-DD[ -- HH:MM]`
pub fn reminder_line(reminder: &Reminder) -> String {
    let time = reminder.format_time();
    if time.is_empty() {
        format!(
            "[{}] {} -- {}",
            reminder.id,
            reminder.title,
            reminder.format_due_date()
        )
    } else {
        format!(
            "[{}] {} -- {} -- {}",
            reminder.id,
            reminder.title,
            reminder.format_due_date(),
            time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_reminder_line_without_time() {
        let reminder = Reminder::new(3, "Dentist", NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(reminder_line(&reminder), "[3] Dentist -- 2024-06-02");
    }

    #[test]
    fn test_reminder_line_with_time() {
        let reminder = Reminder::new(3, "Dentist", NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())
            .with_time(NaiveTime::from_hms_opt(8, 5, 0).unwrap());
        assert_eq!(reminder_line(&reminder), "[3] Dentist -- 2024-06-02 -- 08:05");
    }

    #[test]
    fn test_no_color_flag_wins() {
        let printer = Printer::new(true, &Config::default());
        assert!(!printer.color);
    }
}
