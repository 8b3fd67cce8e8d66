use crate::config::{self, Config};
use crate::error::Result;

use super::Context;

/// Show where configuration and data live
pub fn list(ctx: &Context) -> Result<()> {
    let printer = &ctx.printer;

    printer.header("Configuration Files");
    printer.empty();
    let service = ctx.service()?;
    printer.info(&format!(
        "Data file: {}",
        service.store().data_path().display()
    ));
    printer.info(&format!(
        "Data directory: {}",
        config::data_dir(&ctx.config)?.display()
    ));
    let status = if ctx.config_path.exists() {
        ""
    } else {
        " (not created)"
    };
    printer.info(&format!(
        "Config file: {}{}",
        ctx.config_path.display(),
        status
    ));

    printer.empty();
    printer.info("To change data location, set XDG_DATA_HOME:");
    printer.info("  export XDG_DATA_HOME=/custom/path");
    printer.info("or set data_dir in the config file.");

    Ok(())
}

/// Initialize config.toml with default settings
pub fn init(ctx: &Context) -> Result<()> {
    let config_path = &ctx.config_path;

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), config_path)?;

    ctx.printer
        .success(&format!("Configuration file created: {}", config_path.display()));
    Ok(())
}
