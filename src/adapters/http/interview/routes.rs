//! Router for the interview invite endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{start_interview, submit_interview, validate_invite};
use crate::adapters::http::AppState;

/// Routes mounted at `/api/interview`.
pub fn interview_routes() -> Router<AppState> {
    Router::new()
        .route("/validate/:token", get(validate_invite))
        .route("/start/:token", post(start_interview))
        .route("/submit/:token", post(submit_interview))
}
