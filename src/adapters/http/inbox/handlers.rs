//! HTTP handlers for the inbox endpoints.

use axum::extract::State;
use axum::Json;

use super::dto::{AckResponse, FeedbackRequest, SubscribeRequest, SuggestionRequest};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::OptionalAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::inbox::{
    SubmitFeedbackCommand, SubmitSuggestionCommand, SubscribeCommand,
};

/// `POST /api/subscribe`
pub async fn subscribe(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SubscribeRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state
        .subscribe_handler()
        .handle(SubscribeCommand { email: body.email })
        .await?;
    Ok(Json(AckResponse { success: true }))
}

/// `POST /api/metaphor-suggestions`
pub async fn submit_suggestion(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SuggestionRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state
        .suggestion_handler()
        .handle(SubmitSuggestionCommand {
            suggestion: body.suggestion,
            name: body.name,
            email: body.email,
            inspiration: body.inspiration,
        })
        .await?;
    Ok(Json(AckResponse { success: true }))
}

/// `POST /api/feedback`
///
/// Anonymous submissions are accepted; a valid bearer token attaches the
/// caller's user id to the record.
pub async fn submit_feedback(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    ApiJson(body): ApiJson<FeedbackRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state
        .feedback_handler()
        .handle(SubmitFeedbackCommand {
            feedback: body.feedback,
            email: body.email,
            user_id: user.map(|u| u.id),
        })
        .await?;
    Ok(Json(AckResponse { success: true }))
}
