//! Error handling.
//!
//! Errors are split by where they stop the run:
//! - **Initialization**: logger setup failures
//! - **Database**: the connection itself cannot be opened or closed
//! - **Export**: fatal run errors (missing database, write failures)
//!
//! Per-table query failures never surface as errors; they become skipped
//! outcomes in the export report.

mod types;

// Re-export public API
pub use types::{DatabaseError, ExportError, InitializationError};
