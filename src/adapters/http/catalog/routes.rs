//! Router for the catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_metaphor, get_metaphor_content, list_metaphors};
use crate::adapters::http::AppState;

/// Routes mounted at `/api/metaphors`.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_metaphors))
        .route("/:id", get(get_metaphor))
        .route("/:id/content", get(get_metaphor_content))
}
