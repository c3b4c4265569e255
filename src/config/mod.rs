//! Application configuration and constants.
//!
//! This module provides:
//! - Path conventions and the default table list
//! - The library `Config` struct
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
