use chrono::{Datelike, NaiveDate, NaiveTime};
use clap::Args;
use dialoguer::{Input, MultiSelect, Select};

use super::Context;
use crate::error::{ReminderError, Result};
use crate::input;
use crate::models::{RecurrenceRule, Reminder, Weekday};

/// Flags for non-interactive use; without `--title` the command prompts
#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Reminder title (skips the interactive prompts)
    #[arg(long)]
    pub title: Option<String>,

    /// Due date, or start date for recurring reminders (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Time of day (HH:MM)
    #[arg(long)]
    pub time: Option<String>,

    /// Make the reminder recurrent: weekly, bi-weekly or monthly
    #[arg(long)]
    pub every: Option<String>,

    /// Weekdays for weekly/bi-weekly reminders, e.g. Mon,Thu
    #[arg(long)]
    pub days: Option<String>,

    /// Day of month (1-31) for monthly reminders
    #[arg(long)]
    pub day_of_month: Option<String>,
}

/// Values gathered from flags or prompts, already validated
struct Draft {
    title: String,
    date: NaiveDate,
    time: Option<NaiveTime>,
    rule: Option<RecurrenceRule>,
    days: Vec<Weekday>,
    day_of_month: Option<u32>,
}

/// Add a new reminder
pub fn run(ctx: &Context, args: AddArgs) -> Result<()> {
    let draft = match args.title.as_deref() {
        Some(title) => from_flags(title, &args)?,
        None => prompt()?,
    };

    let service = ctx.service()?;
    let reminder = build(service.next_id()?, draft);
    service.add(reminder.clone())?;

    let printer = &ctx.printer;
    printer.success("✓ Reminder added successfully!");
    printer.empty();
    printer.info(&format!("ID: {}", reminder.id));
    printer.info(&format!("Title: {}", reminder.title));
    printer.info(&format!("Date: {}", reminder.format_due_date()));
    if reminder.time.is_some() {
        printer.info(&format!("Time: {}", reminder.format_time()));
    }
    if let Some(rule) = reminder.rule() {
        printer.info(&format!("Recurrent: {}", rule));
    }
    Ok(())
}

fn build(id: u32, draft: Draft) -> Reminder {
    let mut reminder = match draft.rule {
        Some(rule) => {
            Reminder::recurring(id, draft.title, draft.date, rule).with_days(draft.days)
        }
        None => Reminder::new(id, draft.title, draft.date),
    };
    if let Some(time) = draft.time {
        reminder = reminder.with_time(time);
    }
    if let Some(day) = draft.day_of_month {
        reminder = reminder.with_day_of_month(day);
    }
    reminder
}

fn from_flags(title: &str, args: &AddArgs) -> Result<Draft> {
    let title = input::title(title)?;
    let date = args
        .date
        .as_deref()
        .ok_or_else(|| ReminderError::Validation("--date is required with --title".to_string()))
        .and_then(input::date)?;
    let time = match args.time.as_deref() {
        Some(raw) => input::time(raw)?,
        None => None,
    };
    let rule = args.every.as_deref().map(input::recurrence_rule).transpose()?;

    let days = match (args.days.as_deref(), rule) {
        (None, _) => Vec::new(),
        (Some(raw), Some(rule)) if rule.uses_weekdays() => input::weekdays(raw)?,
        (Some(_), _) => {
            return Err(ReminderError::Validation(
                "--days only applies to weekly and bi-weekly reminders".to_string(),
            ))
        }
    };

    let day_of_month = match (args.day_of_month.as_deref(), rule) {
        (Some(raw), Some(RecurrenceRule::Monthly)) => Some(input::day_of_month(raw)?),
        (None, Some(RecurrenceRule::Monthly)) => Some(date.day()),
        (None, _) => None,
        (Some(_), _) => {
            return Err(ReminderError::Validation(
                "--day-of-month only applies to monthly reminders".to_string(),
            ))
        }
    };

    Ok(Draft {
        title,
        date,
        time,
        rule,
        days,
        day_of_month,
    })
}

fn prompt() -> Result<Draft> {
    let title: String = Input::new()
        .with_prompt("Title")
        .validate_with(|s: &String| input::title(s).map(drop).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_failed)?;

    let recurrent = Select::new()
        .with_prompt("Is this reminder recurrent?")
        .items(&["No", "Yes"])
        .default(0)
        .interact()
        .map_err(prompt_failed)?
        == 1;

    let rule = if recurrent {
        let labels = ["Weekly", "Bi-weekly", "Monthly"];
        let index = Select::new()
            .with_prompt("Recurrence type")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_failed)?;
        Some(RecurrenceRule::ALL[index])
    } else {
        None
    };

    let date_label = if recurrent {
        "Start date (YYYY-MM-DD)"
    } else {
        "Date (YYYY-MM-DD)"
    };
    let date_raw: String = Input::new()
        .with_prompt(date_label)
        .validate_with(|s: &String| input::date(s).map(drop).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_failed)?;
    let date = input::date(&date_raw)?;

    let mut days = Vec::new();
    let mut day_of_month = None;
    match rule {
        Some(rule) if rule.uses_weekdays() => {
            let chosen = MultiSelect::new()
                .with_prompt("Select days (space to toggle, enter to confirm)")
                .items(&Weekday::ALL)
                .interact()
                .map_err(prompt_failed)?;
            days = chosen.into_iter().map(|i| Weekday::ALL[i]).collect();
        }
        Some(_) => {
            let raw: String = Input::new()
                .with_prompt("Day of month (1-31)")
                .validate_with(|s: &String| {
                    input::day_of_month(s).map(drop).map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_failed)?;
            day_of_month = Some(input::day_of_month(&raw)?);
        }
        None => {}
    }

    let time_raw: String = Input::new()
        .with_prompt("Time (HH:MM, optional, press Enter to skip)")
        .allow_empty(true)
        .validate_with(|s: &String| input::time(s).map(drop).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_failed)?;
    let time = input::time(&time_raw)?;

    Ok(Draft {
        title: input::title(&title)?,
        date,
        time,
        rule,
        days,
        day_of_month,
    })
}

fn prompt_failed(e: dialoguer::Error) -> ReminderError {
    ReminderError::Prompt(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(title: &str, date: &str) -> AddArgs {
        AddArgs {
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            ..AddArgs::default()
        }
    }

    #[test]
    fn test_from_flags_one_off() {
        let mut a = args("Dentist", "2024-06-02");
        a.time = Some("14:30".to_string());

        let reminder = build(7, from_flags("Dentist", &a).unwrap());
        assert_eq!(reminder.id, 7);
        assert!(!reminder.is_recurrent);
        assert_eq!(reminder.format_time(), "14:30");
    }

    #[test]
    fn test_from_flags_requires_date() {
        let a = AddArgs {
            title: Some("Dentist".to_string()),
            ..AddArgs::default()
        };
        assert!(matches!(
            from_flags("Dentist", &a),
            Err(ReminderError::Validation(_))
        ));
    }

    #[test]
    fn test_from_flags_weekly_days() {
        let mut a = args("Gym", "2024-06-03");
        a.every = Some("weekly".to_string());
        a.days = Some("Thu,Mon".to_string());

        let reminder = build(1, from_flags("Gym", &a).unwrap());
        assert_eq!(reminder.rule(), Some(RecurrenceRule::Weekly));
        assert_eq!(reminder.recurrence_days, vec![Weekday::Mon, Weekday::Thu]);
        assert_eq!(reminder.recurrence_day_of_month, None);
    }

    #[test]
    fn test_from_flags_monthly_defaults_to_start_day() {
        let mut a = args("Rent", "2024-06-28");
        a.every = Some("monthly".to_string());

        let reminder = build(1, from_flags("Rent", &a).unwrap());
        assert_eq!(reminder.recurrence_day_of_month, Some(28));
    }

    #[test]
    fn test_from_flags_rejects_mismatched_options() {
        let mut a = args("Rent", "2024-06-28");
        a.days = Some("Mon".to_string());
        assert!(from_flags("Rent", &a).is_err());

        let mut a = args("Gym", "2024-06-28");
        a.every = Some("weekly".to_string());
        a.day_of_month = Some("3".to_string());
        assert!(from_flags("Gym", &a).is_err());

        let mut a = args("Rent", "2024-06-28");
        a.every = Some("monthly".to_string());
        a.day_of_month = Some("32".to_string());
        assert!(from_flags("Rent", &a).is_err());
    }
}
