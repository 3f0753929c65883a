//! Order API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Static segment, matched before `/{id}`
        .route("/revenue", get(handler::revenue))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update_status)
                .patch(handler::update_status)
                .delete(handler::delete),
        )
}
