use super::Context;
use crate::error::Result;
use crate::service::CheckOutcome;

/// Mark a reminder as complete
pub fn run(ctx: &Context, id: u32) -> Result<()> {
    let service = ctx.service()?;
    let printer = &ctx.printer;

    match service.check(id)? {
        CheckOutcome::Advanced(next) => {
            printer.success("✓ Recurrent reminder advanced to next cycle");
            printer.empty();
            printer.info(&format!("Next due date: {}", next.format("%Y-%m-%d")));
        }
        CheckOutcome::Completed => {
            printer.success("✓ Reminder completed and deleted");
        }
    }

    Ok(())
}
