//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use crate::core::ServerState;
use crate::orders::validation::parse_status;
use crate::utils::{AppError, AppResult, ValidJson};
use shared::models::{Order, OrderCreate, OrderStatusUpdate, Revenue};

/// Ids are integers; anything else cannot name an order
fn parse_order_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::order_not_found(raw))
}

/// GET /api/orders - list all orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders().list().await?;
    Ok(Json(orders))
}

/// GET /api/orders/:id - get one order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let id = parse_order_id(&id)?;
    let order = state.orders().get(id).await?;
    Ok(Json(order))
}

/// POST /api/orders - create an order
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.orders().create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT|PATCH /api/orders/:id - change order status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let id = match parse_order_id(&id) {
        Ok(id) => id,
        Err(not_found) => {
            // A bad payload is reported ahead of an unknown id
            parse_status(&payload)?;
            return Err(not_found);
        }
    };
    let order = state.orders().update_status(id, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id - delete an order
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_order_id(&id)?;
    state.orders().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/orders/revenue - revenue from paid orders
pub async fn revenue(State(state): State<ServerState>) -> AppResult<Json<Revenue>> {
    let revenue = state.orders().revenue().await?;
    Ok(Json(revenue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_order_id() {
        assert_eq!(parse_order_id("17").unwrap(), 17);

        let err = parse_order_id("abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        assert!(parse_order_id("1.5").is_err());
    }
}
