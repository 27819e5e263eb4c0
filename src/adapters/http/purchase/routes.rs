//! Router for the purchase endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_purchases, purchase_bundle, purchase_metaphor};
use crate::adapters::http::AppState;

/// Purchase routes mounted at `/api/purchase`.
pub fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", post(purchase_metaphor))
        .route("/bundle/:id", post(purchase_bundle))
}

/// User-scoped routes mounted at `/api/user`.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/purchases", get(list_purchases))
}
