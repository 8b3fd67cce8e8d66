use super::Context;
use crate::error::Result;

/// List due reminders (or every reminder with `all`)
pub fn run(ctx: &Context, all: bool) -> Result<()> {
    let service = ctx.service()?;
    let printer = &ctx.printer;

    let mut reminders = if all {
        service.list_all()?
    } else {
        service.due()?
    };

    if reminders.is_empty() {
        printer.info(if all {
            "No reminders stored."
        } else {
            "No due reminders found."
        });
        return Ok(());
    }

    reminders.sort_by_key(|r| r.id);

    if ctx.config.display.banner {
        printer.banner();
        printer.empty();
    }

    for reminder in &reminders {
        printer.reminder(reminder, reminder.is_overdue());
    }

    printer.empty();
    if all {
        printer.info(&format!("Total: {} REMINDER(S)", reminders.len()));
    } else {
        printer.info(&format!("Total: {} URGENT REMINDER(S)", reminders.len()));
    }
    Ok(())
}
