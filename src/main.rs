/*!
# csv-nest CLI

Command-line interface for the CSV to nested JSON converter.
*/

use anyhow::{Context, Result};
use clap::Parser;
use csv_nest::cli_common::{
    format_duration, init_logging, print_error, print_success, CommonArgs, ConvertArgs,
    OutputWriter,
};
use csv_nest::{convert_path, Conversion, ConvertError};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "csv-nest",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert CSV with dotted-path headers into nested JSON"
)]
struct Cli {
    #[clap(flatten)]
    common: CommonArgs,

    #[clap(flatten)]
    convert: ConvertArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.common.log_level()) {
        eprintln!("{}", e);
    }

    if let Err(e) = run(&cli) {
        if let Some(err) = e.downcast_ref::<ConvertError>() {
            debug!(kind = %err.kind(), row = ?err.row(), "conversion failed");
        }
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let args = &cli.convert;
    let config = args.resolve_config()?;
    debug!(?config, "effective configuration");

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let start = Instant::now();
    info!(input = %args.input.display(), "converting");

    let Conversion { document, report } = convert_path(&args.input, &config)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    if args.stdout {
        OutputWriter::stdout().write_document(&document)?;
    } else {
        let mut writer = OutputWriter::file(&args.output)?;
        writer.write_document(&document)?;
        if cli.common.should_print() {
            print_success(&format!("JSON written: {}", writer.target().display()));
        }
    }

    info!(
        records = report.records,
        rows = report.rows_read,
        duplicates = report.duplicates,
        elapsed = %format_duration(start.elapsed()),
        "done"
    );

    Ok(())
}
