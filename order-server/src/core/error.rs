use thiserror::Error;

/// Startup and lifecycle errors
///
/// Request-level failures use `shared::error::AppError`; this type only covers
/// what can stop the server from starting or serving.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Lifecycle Result type alias
pub type Result<T> = std::result::Result<T, ServerError>;
