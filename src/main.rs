//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `table_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use table_export::initialization::init_logger_with;
use table_export::{run_export, Config, ExportError, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::from(&opt);

    match run_export(config).await {
        Ok(report) => {
            for outcome in &report.outcomes {
                println!("{outcome}");
            }
            println!(
                "Exported {} table{} ({} empty, {} skipped) in {:.1}s",
                report.written(),
                if report.written() == 1 { "" } else { "s" },
                report.empty(),
                report.skipped(),
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e @ ExportError::MissingDatabase(_)) => {
            eprintln!("{e}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("table_export error: {:#}", anyhow::Error::from(e));
            process::exit(1);
        }
    }
}
