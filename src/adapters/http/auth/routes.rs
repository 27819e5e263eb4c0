//! Router for the auth endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_profile, login_with_google, logout};
use crate::adapters::http::AppState;

/// Routes mounted at `/api/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/google", post(login_with_google))
        .route("/me", get(get_profile))
        .route("/logout", post(logout))
}
