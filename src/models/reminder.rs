use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::formats::{calendar_date, time_of_day};

/// Day of week used by weekly and bi-weekly recurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Days since Monday (Mon = 0 .. Sun = 6)
    pub fn number_from_monday(self) -> u32 {
        self.to_chrono().num_days_from_monday()
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Mon => chrono::Weekday::Mon,
            Weekday::Tue => chrono::Weekday::Tue,
            Weekday::Wed => chrono::Weekday::Wed,
            Weekday::Thu => chrono::Weekday::Thu,
            Weekday::Fri => chrono::Weekday::Fri,
            Weekday::Sat => chrono::Weekday::Sat,
            Weekday::Sun => chrono::Weekday::Sun,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepts the three-letter abbreviation or the full English name, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let abbrev = day.as_str().to_ascii_lowercase();
                lower == abbrev || (lower.len() > 3 && day_name(*day) == lower)
            })
            .ok_or_else(|| format!("unknown weekday '{}', use Mon..Sun", s.trim()))
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Cadence governing how a completed recurring reminder advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceRule {
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "bi-weekly")]
    BiWeekly,
    #[serde(rename = "monthly")]
    Monthly,
}

impl RecurrenceRule {
    pub const ALL: [RecurrenceRule; 3] = [
        RecurrenceRule::Weekly,
        RecurrenceRule::BiWeekly,
        RecurrenceRule::Monthly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecurrenceRule::Weekly => "weekly",
            RecurrenceRule::BiWeekly => "bi-weekly",
            RecurrenceRule::Monthly => "monthly",
        }
    }

    /// Whether the rule is driven by selected weekdays (as opposed to a day of month)
    pub fn uses_weekdays(self) -> bool {
        matches!(self, RecurrenceRule::Weekly | RecurrenceRule::BiWeekly)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(RecurrenceRule::Weekly),
            "bi-weekly" | "biweekly" => Ok(RecurrenceRule::BiWeekly),
            "monthly" => Ok(RecurrenceRule::Monthly),
            other => Err(format!(
                "unknown recurrence '{}', use weekly, bi-weekly or monthly",
                other
            )),
        }
    }
}

/// A single reminder, one-off or recurring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique, stable identifier (recurring reminders keep it across cycles)
    pub id: u32,

    pub title: String,

    /// Calendar date the reminder falls due
    #[serde(with = "calendar_date")]
    pub due_date: NaiveDate,

    /// Optional local time of day; absent means midnight
    #[serde(default, with = "time_of_day", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,

    pub is_recurrent: bool,

    #[serde(
        rename = "recurrent_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence_rule: Option<RecurrenceRule>,

    /// Selected weekdays for weekly and bi-weekly rules
    #[serde(rename = "recurrent_days", default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence_days: Vec<Weekday>,

    /// Target day (1-31) for the monthly rule
    #[serde(
        rename = "recurrent_day_of_month",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recurrence_day_of_month: Option<u32>,

    pub created_at: DateTime<Local>,
}

impl Reminder {
    /// Create a one-off reminder
    pub fn new(id: u32, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            time: None,
            is_recurrent: false,
            recurrence_rule: None,
            recurrence_days: Vec::new(),
            recurrence_day_of_month: None,
            created_at: Local::now(),
        }
    }

    /// Create a recurring reminder starting on `due_date`
    pub fn recurring(
        id: u32,
        title: impl Into<String>,
        due_date: NaiveDate,
        rule: RecurrenceRule,
    ) -> Self {
        Self {
            is_recurrent: true,
            recurrence_rule: Some(rule),
            ..Self::new(id, title, due_date)
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.recurrence_days = days;
        self
    }

    pub fn with_day_of_month(mut self, day: u32) -> Self {
        self.recurrence_day_of_month = Some(day);
        self
    }

    /// The recurrence rule, or `None` for one-off reminders regardless of stored fields
    pub fn rule(&self) -> Option<RecurrenceRule> {
        if self.is_recurrent {
            self.recurrence_rule
        } else {
            None
        }
    }

    /// Local instant at which the reminder falls due
    pub fn due_instant(&self) -> NaiveDateTime {
        self.due_date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Due at `now` or earlier (inclusive)
    pub fn is_due_at(&self, now: NaiveDateTime) -> bool {
        now >= self.due_instant()
    }

    /// Strictly past the due instant
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        now > self.due_instant()
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Local::now().naive_local())
    }

    pub fn format_due_date(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }

    pub fn format_time(&self) -> String {
        self.time
            .map(|t| t.format(time_of_day::FORMAT).to_string())
            .unwrap_or_default()
    }
}
