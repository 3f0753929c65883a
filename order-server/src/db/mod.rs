//! Database Module
//!
//! Handles SQLite connection pool and migrations

pub mod repository;

use crate::core::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Path value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Database service, owns the SQLite connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database at `db_path` and apply migrations
    ///
    /// `":memory:"` opens an in-memory database instead, see [`DbService::in_memory`].
    pub async fn new(db_path: &str) -> Result<Self> {
        if db_path == IN_MEMORY {
            return Self::in_memory().await;
        }

        // WAL, foreign keys, normal sync; wait up to 5s on write contention
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_millis(5000))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        tracing::info!(path = %db_path, "Database connection established (SQLite WAL)");

        Self::migrate(pool).await
    }

    /// In-memory database, migrated and empty
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        tracing::debug!("In-memory database opened");

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
        Ok(Self { pool })
    }
}
