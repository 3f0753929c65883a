//! Shared types for the café order service
//!
//! Models and the unified error system used by `order-server` and by any
//! client that talks to its HTTP API.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
