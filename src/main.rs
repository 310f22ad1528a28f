//! Contact Book - Main entry point
//!
//! Loads the contacts file, runs the interactive prompt and saves the
//! contacts back on exit.

use anyhow::Result;
use contact_book::{Config, ContactRepl, Session};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the prompt output clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using contacts file {} ({:?})",
        config.contacts_file.display(),
        config.storage_format
    );

    let (session, rejected) = Session::open(config.store())?;
    for rejection in &rejected {
        warn!(
            "Skipped entry {} ({}): {}",
            rejection.entry, rejection.content, rejection.reason
        );
    }
    info!("Loaded {} contacts", session.book().len());

    ContactRepl::new(session)
        .with_history(config.history_file.clone())
        .run()?;

    info!("Contacts saved to {}", config.contacts_file.display());
    Ok(())
}
