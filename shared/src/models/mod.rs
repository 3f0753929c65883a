//! Data models
//!
//! Shared between order-server and its clients (via API).
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod order;

// Re-exports
pub use order::*;
