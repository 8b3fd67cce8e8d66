mod cli;
mod config;
mod display;
mod error;
mod input;
mod models;
mod recurrence;
mod service;
mod store;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cli::add::AddArgs;
use cli::setup::Shell;
use cli::Context;

#[derive(Parser)]
#[command(name = "urgent-reminder")]
#[command(
    about = "A simple CLI tool to manage reminders",
    long_about = "Manage one-off and recurrent (weekly, bi-weekly, monthly) reminders.\n\n\
                  Data is stored in $XDG_DATA_HOME/urgent-reminder/ \
                  (default ~/.local/share/urgent-reminder/)."
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new reminder (interactive unless --title is given)
    Add(AddArgs),
    /// List due reminders
    List {
        /// List every stored reminder, due or not
        #[arg(long)]
        all: bool,
    },
    /// Mark a reminder as complete (recurrent ones advance, others are deleted)
    Check {
        /// Reminder ID
        id: u32,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Setup shell integration for automatic reminder display
    Setup {
        /// Shell to configure (detected from $SHELL by default)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// List config and data file locations
    List,
    /// Create a config file with default settings
    Init,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::new().filter_or("URGENT_REMINDER_LOG", "warn"),
    )
    .init();

    let cli = Cli::parse();

    let result = Context::load(cli.config, cli.no_color).and_then(|ctx| match cli.command {
        Commands::Add(args) => cli::add::run(&ctx, args),
        Commands::List { all } => cli::list::run(&ctx, all),
        Commands::Check { id } => cli::check::run(&ctx, id),
        Commands::Config { command } => match command {
            ConfigCommands::List => cli::config::list(&ctx),
            ConfigCommands::Init => cli::config::init(&ctx),
        },
        Commands::Setup { shell } => cli::setup::run(&ctx, shell),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
