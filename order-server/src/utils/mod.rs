//! Utility module
//!
//! - [`logger`]: tracing subscriber setup
//! - [`validation`]: text length limits and guard helpers
//! - [`extract`]: JSON body extractor that reports rejections as [`AppError`]

pub mod extract;
pub mod logger;
pub mod validation;

pub use extract::ValidJson;
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
