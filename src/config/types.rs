//! Configuration types and CLI options.
//!
//! This module defines the library `Config` (plain data, no CLI dependencies)
//! and the `Opt` command-line parser that produces it.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::constants::{DB_RELATIVE_PATH, DEFAULT_TABLES, OUTPUT_RELATIVE_DIR};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use table_export::Config;
///
/// let config = Config::from_root("/srv/app");
/// assert!(config.db_path.ends_with("prisma/dev-reset.db"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite database to read from
    pub db_path: PathBuf,

    /// Directory that receives one `<table>.json` per exported table
    pub output_dir: PathBuf,

    /// Table names to export, in order (duplicates are exported once per entry)
    pub tables: Vec<String>,
}

impl Config {
    /// Builds a config with the standard path conventions anchored at `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            db_path: root.join(DB_RELATIVE_PATH),
            output_dir: root.join(OUTPUT_RELATIVE_DIR),
            tables: DEFAULT_TABLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_root(".")
    }
}

/// Command-line options for the `table_export` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "table_export",
    about = "Export SQLite tables from prisma/dev-reset.db into JSON files under scripts/data/"
)]
pub struct Opt {
    /// Project root that holds prisma/dev-reset.db and scripts/data/
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Log level: error, warn, info, debug, or trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain or json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Config::from_root(&opt.root)
    }
}
