//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status
///
/// Any status may be set from any other; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Not yet ready
    #[default]
    Pending,
    /// Prepared, unpaid
    Ready,
    /// Settled
    Paid,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Pending, Self::Ready, Self::Paid];

    /// Wire and storage representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `pending`, `ready`, `paid`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order status '{0}', expected one of: pending, ready, paid")]
pub struct InvalidOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "ready" => Ok(Self::Ready),
            "paid" => Ok(Self::Paid),
            other => Err(InvalidOrderStatus(other.to_string())),
        }
    }
}

/// A line item: dish name and its price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// Price in currency unit
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub table_number: i32,
    pub items: Vec<OrderItem>,
    /// Sum of item prices, 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub status: OrderStatus,
}

/// Create order payload
///
/// Fields other than these (a client-supplied `status`, for one) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_number: i32,
    pub items: Vec<OrderItem>,
}

/// Update order status payload
///
/// `status` is kept as a raw string so that an unknown value is reported as a
/// field validation error instead of a body parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

/// Revenue over paid orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revenue {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}
