// storage/mod.rs
// Database access module

pub mod pool;

// Re-export commonly used items
pub use pool::{close_database, open_database};
