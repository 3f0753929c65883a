//! Order Service
//!
//! The six order operations. Validation happens here, storage is delegated
//! to an [`OrderStore`], and missing ids become `OrderNotFound`.

use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate, Revenue};

use super::validation::{parse_status, validate_order_create};
use crate::db::repository::OrderStore;

#[derive(Clone, Debug)]
pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All orders, oldest first
    pub async fn list(&self) -> AppResult<Vec<Order>> {
        let orders = self.store.find_all().await?;
        tracing::debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    pub async fn get(&self, id: i64) -> AppResult<Order> {
        tracing::debug!(order_id = id, "Fetching order");
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::order_not_found(id))
    }

    /// Validate and persist a new order
    ///
    /// The total is computed from the items and the status always starts as
    /// `pending`.
    pub async fn create(&self, input: OrderCreate) -> AppResult<Order> {
        let new_order = validate_order_create(input)?;
        let order = self.store.insert(&new_order).await?;
        tracing::info!(
            order_id = order.id,
            table_number = order.table_number,
            total_price = %order.total_price,
            items = order.items.len(),
            "Order created"
        );
        Ok(order)
    }

    /// Change the status of an order
    ///
    /// The payload is checked before the id is looked up, so an invalid
    /// status is reported even when the order does not exist.
    pub async fn update_status(&self, id: i64, input: OrderStatusUpdate) -> AppResult<Order> {
        let status = parse_status(&input)?;
        let order = self
            .store
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::order_not_found(id))?;
        tracing::info!(order_id = id, status = %status, "Order status updated");
        Ok(order)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::order_not_found(id));
        }
        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }

    /// Sum of `total_price` over paid orders
    pub async fn revenue(&self) -> AppResult<Revenue> {
        let total_revenue = self
            .store
            .sum_total_price_where_status(OrderStatus::Paid)
            .await?;
        tracing::debug!(%total_revenue, "Computed revenue");
        Ok(Revenue { total_revenue })
    }
}
