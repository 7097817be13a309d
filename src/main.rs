//! Contact Book - Main entry point
//!
//! Starts an interactive session on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::Result;
use clap::Parser;
use contact_book::{Config, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Keep contacts, phone numbers and birthdays for the length of one session.
#[derive(Parser, Debug)]
#[command(name = "contact-book")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Days covered by `birthdays` when no count is given
    #[arg(short, long)]
    window_days: Option<u32>,

    /// Prompt shown before each command
    #[arg(short, long)]
    prompt: Option<String>,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let level = match cli.verbose {
        0 => config.log_level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    // Initialize logging (stderr only to avoid polluting the conversation)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(days) = cli.window_days {
        config = config.with_birthday_window(days).inspect_err(|e| {
            error!("Invalid command-line option: {}", e);
        })?;
    }
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
    }

    info!(
        "Configuration loaded: birthday window {} days",
        config.birthday_window_days
    );

    let mut session = Session::new(config);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
