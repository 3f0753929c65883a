//! Café Order Server
//!
//! HTTP backend that records table orders, moves them through
//! `pending → ready → paid`, and reports revenue from paid orders.
//!
//! # Module structure
//!
//! ```text
//! order-server/src/
//! ├── core/          # config, state, server lifecycle, startup errors
//! ├── api/           # HTTP routes and handlers
//! ├── orders/        # order service, validation, money helpers
//! ├── db/            # SQLite pool, migrations, repository
//! └── utils/         # logging, validation helpers, extractors
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use orders::OrderService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read configuration and install the logger
pub fn setup_environment() -> Result<Config, ServerError> {
    // A missing .env file is fine; the process environment still applies
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    config.validate()?;

    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    Ok(config)
}
