//! Configuration constants.
//!
//! Fixed path conventions and the default table list used when no explicit
//! configuration is supplied.

/// Database file location, relative to the project root.
pub const DB_RELATIVE_PATH: &str = "prisma/dev-reset.db";

/// Output directory for the JSON dumps, relative to the project root.
pub const OUTPUT_RELATIVE_DIR: &str = "scripts/data";

/// Tables exported on every run, in order.
///
/// Both snake_case and PascalCase spellings are listed because the database
/// may carry either schema; whichever is absent is skipped at query time.
/// `order_items` appears twice and is exported twice.
pub const DEFAULT_TABLES: &[&str] = &[
    "users",
    "accounts",
    "Account",
    "sessions",
    "Session",
    "password_reset_tokens",
    "PasswordResetToken",
    "VerificationToken",
    "verification_tokens",
    "products",
    "warehouses",
    "inventory",
    "suppliers",
    "orders",
    "order_items",
    "order_items",
    "stock_movements",
    "audit_logs",
];

/// File extension appended to each table name in the output directory.
pub const OUTPUT_EXTENSION: &str = "json";
