//! Router for the inbox endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{submit_feedback, submit_suggestion, subscribe};
use crate::adapters::http::AppState;

/// Routes mounted directly under `/api`.
pub fn inbox_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/metaphor-suggestions", post(submit_suggestion))
        .route("/feedback", post(submit_feedback))
}
