//! Repository Module
//!
//! Storage access behind the [`OrderStore`] trait, with the SQLite
//! implementation in [`order`].

pub mod order;

pub use order::OrderRepository;

use rust_decimal::Decimal;
use shared::error::AppError;
use shared::models::{Order, OrderStatus};
use thiserror::Error;

use crate::orders::NewOrder;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    /// A stored row does not decode into a valid `Order`
    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Corrupted(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Order persistence
///
/// Lookups return `Option`/`bool` for a missing id; turning that into a
/// not-found error is the caller's job.
#[allow(async_fn_in_trait)]
pub trait OrderStore {
    /// All orders, in storage order
    async fn find_all(&self) -> RepoResult<Vec<Order>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>>;

    /// Persist a validated order with status `pending`; the store assigns the id
    async fn insert(&self, order: &NewOrder) -> RepoResult<Order>;

    /// Set only the status column; `None` if no such order
    async fn update_status(&self, id: i64, status: OrderStatus) -> RepoResult<Option<Order>>;

    /// `false` if no such order
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    /// Sum of `total_price` over orders in `status`, zero when there are none
    async fn sum_total_price_where_status(&self, status: OrderStatus) -> RepoResult<Decimal>;
}
