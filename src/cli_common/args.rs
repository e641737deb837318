//! Command-line arguments

use crate::config::ConverterConfig;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Common logging arguments
#[derive(Parser, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    /// Log level derived from the flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Whether status output should be printed
    pub fn should_print(&self) -> bool {
        !self.quiet
    }
}

/// Conversion arguments
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// CSV file to convert
    #[arg(default_value = "export.csv")]
    pub input: PathBuf,

    /// JSON file to write (truncated if it exists)
    #[arg(short, long, default_value = "export.json")]
    pub output: PathBuf,

    /// Configuration file (TOML, or YAML by extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Column used as the record key
    #[arg(long)]
    pub key_field: Option<String>,

    /// Trim whitespace around headers and cells
    #[arg(long)]
    pub trim: bool,

    /// Fail on conflicting header paths instead of overwriting
    #[arg(long)]
    pub strict: bool,

    /// Print JSON to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl ConvertArgs {
    /// Loads the config file and applies command-line flags on top of it
    pub fn resolve_config(&self) -> Result<ConverterConfig> {
        let mut config = match &self.config {
            Some(path) => ConverterConfig::load_from_file(path)?,
            None => ConverterConfig::default(),
        };

        if let Some(key_field) = &self.key_field {
            config.key_field = key_field.clone();
        }
        if self.trim {
            config.trim_whitespace = true;
        }
        if self.strict {
            config.strict_paths = true;
        }

        config.validate()?;
        Ok(config)
    }
}
