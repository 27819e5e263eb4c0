//! HTTP handlers for the interview invite endpoints.

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{InviteStatusResponse, SubmitRequest, ValidateResponse};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::AppState;
use crate::application::handlers::interview::{
    StartInterviewCommand, SubmitInterviewCommand, ValidateInviteQuery,
};
use crate::domain::foundation::{DomainError, InviteToken};

/// `GET /api/interview/validate/:token`
pub async fn validate_invite(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let check = state
        .validate_invite_handler()
        .handle(ValidateInviteQuery {
            token: parse_token(token)?,
        })
        .await?;

    Ok(Json(ValidateResponse::from(&check)))
}

/// `POST /api/interview/start/:token`
pub async fn start_interview(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<InviteStatusResponse>, ApiError> {
    let invite = state
        .start_interview_handler()
        .handle(StartInterviewCommand {
            token: parse_token(token)?,
        })
        .await?;

    Ok(Json(InviteStatusResponse::from(&invite)))
}

/// `POST /api/interview/submit/:token`
pub async fn submit_interview(
    State(state): State<AppState>,
    Path(token): Path<String>,
    ApiJson(body): ApiJson<SubmitRequest>,
) -> Result<Json<InviteStatusResponse>, ApiError> {
    let invite = state
        .submit_interview_handler()
        .handle(SubmitInterviewCommand {
            token: parse_token(token)?,
            answers: body.answers,
        })
        .await?;

    Ok(Json(InviteStatusResponse::from(&invite)))
}

fn parse_token(token: String) -> Result<InviteToken, ApiError> {
    InviteToken::new(token)
        .map_err(|e| ApiError::Domain(DomainError::from(e)))
}
