//! Order Repository (SQLite)

use super::{OrderStore, RepoError, RepoResult};
use crate::orders::NewOrder;
use crate::orders::money;
use rust_decimal::Decimal;
use shared::models::{Order, OrderItem, OrderStatus};
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str = "id, table_number, items, total_price, status";

/// Raw `orders` row: items as JSON text, total in cents
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    table_number: i32,
    items: String,
    total_price: i64,
    status: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepoError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<OrderItem> = serde_json::from_str(&row.items)?;
        let status = row
            .status
            .parse::<OrderStatus>()
            .map_err(|e| RepoError::Corrupted(format!("order {}: {e}", row.id)))?;
        Ok(Order {
            id: row.id,
            table_number: row.table_number,
            items,
            total_price: money::from_cents(row.total_price),
            status,
        })
    }
}

#[derive(Clone, Debug)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl OrderStore for OrderRepository {
    async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let rows: Vec<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(Order::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        let row: Option<OrderRow> =
            sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(Order::try_from).transpose()
    }

    async fn insert(&self, order: &NewOrder) -> RepoResult<Order> {
        let items = serde_json::to_string(order.items())
            .map_err(|e| RepoError::Database(format!("Failed to encode items: {e}")))?;
        let cents = money::to_cents(order.total_price()).ok_or_else(|| {
            RepoError::Database(format!(
                "Total {} is not representable in cents",
                order.total_price()
            ))
        })?;

        let row: OrderRow = sqlx::query_as(&format!(
            "INSERT INTO orders (table_number, items, total_price, status) VALUES (?, ?, ?, ?) RETURNING {ORDER_COLUMNS}"
        ))
        .bind(order.table_number())
        .bind(items)
        .bind(cents)
        .bind(OrderStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;
        Order::try_from(row)
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> RepoResult<Option<Order>> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "UPDATE orders SET status = ? WHERE id = ? RETURNING {ORDER_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Order::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn sum_total_price_where_status(&self, status: OrderStatus) -> RepoResult<Decimal> {
        let cents: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(total_price), 0) FROM orders WHERE status = ?")
                .bind(status.as_str())
                .fetch_one(&self.pool)
                .await?;
        Ok(money::from_cents(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::orders::validation::validate_order_create;
    use rust_decimal::dec;
    use shared::models::OrderCreate;

    async fn test_repo() -> OrderRepository {
        let db = DbService::in_memory().await.unwrap();
        OrderRepository::new(db.pool)
    }

    fn new_order(table_number: i32, prices: &[Decimal]) -> NewOrder {
        let items = prices
            .iter()
            .enumerate()
            .map(|(i, price)| OrderItem {
                name: format!("Dish {i}"),
                price: *price,
            })
            .collect();
        validate_order_create(OrderCreate {
            table_number,
            items,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_pending() {
        let repo = test_repo().await;
        let order = repo
            .insert(&new_order(4, &[dec!(3.50), dec!(2.25)]))
            .await
            .unwrap();

        assert!(order.id > 0);
        assert_eq!(order.table_number, 4);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[1].price, dec!(2.25));
        assert_eq!(order.total_price, dec!(5.75));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = test_repo().await;
        assert!(repo.find_all().await.unwrap().is_empty());

        let first = repo.insert(&new_order(1, &[dec!(1)])).await.unwrap();
        let second = repo.insert(&new_order(2, &[dec!(2)])).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = test_repo().await;
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_status_only_touches_status() {
        let repo = test_repo().await;
        let created = repo.insert(&new_order(7, &[dec!(9.99)])).await.unwrap();

        let updated = repo
            .update_status(created.id, OrderStatus::Ready)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Ready);
        assert_eq!(updated.table_number, created.table_number);
        assert_eq!(updated.items, created.items);
        assert_eq!(updated.total_price, created.total_price);

        assert!(
            repo.update_status(created.id + 1, OrderStatus::Paid)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = test_repo().await;
        let created = repo.insert(&new_order(1, &[dec!(4)])).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sum_total_price_where_status() {
        let repo = test_repo().await;
        assert_eq!(
            repo.sum_total_price_where_status(OrderStatus::Paid)
                .await
                .unwrap(),
            Decimal::ZERO
        );

        let a = repo.insert(&new_order(1, &[dec!(0.10), dec!(0.20)])).await.unwrap();
        let b = repo.insert(&new_order(2, &[dec!(0.30)])).await.unwrap();
        repo.insert(&new_order(3, &[dec!(100)])).await.unwrap();
        repo.update_status(a.id, OrderStatus::Paid).await.unwrap();
        repo.update_status(b.id, OrderStatus::Paid).await.unwrap();

        assert_eq!(
            repo.sum_total_price_where_status(OrderStatus::Paid)
                .await
                .unwrap(),
            dec!(0.60)
        );
        assert_eq!(
            repo.sum_total_price_where_status(OrderStatus::Pending)
                .await
                .unwrap(),
            dec!(100)
        );
    }

    #[tokio::test]
    async fn test_corrupted_status_is_reported() {
        let repo = test_repo().await;
        // Bypass the CHECK constraint to simulate a row written by something else
        sqlx::query("PRAGMA ignore_check_constraints = ON")
            .execute(&repo.pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO orders (table_number, items, total_price, status) VALUES (1, '[]', 100, 'lost')",
        )
        .execute(&repo.pool)
        .await
        .unwrap();

        assert!(matches!(
            repo.find_all().await,
            Err(RepoError::Corrupted(_))
        ));
    }
}
