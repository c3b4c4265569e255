//! Application initialization.
//!
//! The exporter has a single process-wide resource to set up before a run:
//! the logger. The database connection is owned by the run itself.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
