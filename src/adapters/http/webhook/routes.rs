//! Router for the Stripe webhook.

use axum::routing::post;
use axum::Router;

use super::handlers::stripe_webhook;
use crate::adapters::http::AppState;

/// Routes mounted at `/api/stripe`.
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook", post(stripe_webhook))
}
