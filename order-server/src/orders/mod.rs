//! Order Management
//!
//! - **money**: exact decimal arithmetic for prices and totals
//! - **validation**: turns request payloads into [`NewOrder`] / [`OrderStatus`]
//! - **service**: the six order operations on top of an [`OrderStore`]
//!
//! ```text
//! handler → OrderService → validation → OrderStore (SQLite)
//! ```
//!
//! [`OrderStatus`]: shared::models::OrderStatus
//! [`OrderStore`]: crate::db::repository::OrderStore

pub mod money;
pub mod service;
pub mod validation;

pub use service::OrderService;
pub use validation::NewOrder;
