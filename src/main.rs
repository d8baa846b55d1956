//! Address Book - Main entry point
//!
//! Runs the interactive menu over the address book file named by the
//! configuration, loading it on startup and saving it on exit.

use address_book::{Config, JsonFileRepository, Shell};
use anyhow::Result;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so the menu on stdout stays readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book file: {}", config.book_file.display());

    let repository = JsonFileRepository::new(config.book_file.clone());
    let mut shell = Shell::open(repository, io::stdin().lock(), io::stdout())?;
    shell.run()?;

    info!("Address book shutdown complete");
    Ok(())
}
