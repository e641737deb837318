//! Shared CLI helpers
//!
//! Common functionality of the binary:
//! - Logging setup
//! - Colored status messages
//! - Writing the result document

use anyhow::Result;
use colored::Colorize;

pub mod args;
pub mod output;

pub use args::{CommonArgs, ConvertArgs};
pub use output::OutputWriter;

/// Initializes the logging system
///
/// Logs go to stderr so that `--stdout` emits clean JSON.
pub fn init_logging(level: tracing::Level) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Prints a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Prints an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red());
}

/// Formats a duration for humans
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{:03}s", secs, millis)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
