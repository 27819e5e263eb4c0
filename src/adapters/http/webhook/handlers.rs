//! Stripe webhook endpoint.
//!
//! Signature verification happens on the raw request bytes before any
//! JSON parsing or business logic; a missing or invalid signature is a
//! hard 400. Once the event is authentic the endpoint always answers
//! `{"received": true}` - reconciliation problems are logged, never
//! surfaced, so Stripe does not retry events we cannot act on anyway.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::AppState;
use crate::domain::payment::WebhookError;

/// Body returned for every authentic event.
#[derive(Debug, Serialize)]
pub struct ReceivedResponse {
    pub received: bool,
}

/// `POST /api/stripe/webhook`
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = match headers.get("Stripe-Signature").and_then(|h| h.to_str().ok()) {
        Some(signature) => signature,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "MISSING_SIGNATURE",
                    "Missing Stripe-Signature header",
                )),
            )
                .into_response();
        }
    };

    let event = match state.webhook_verifier.verify_and_parse(&body, signature) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("webhook rejected: {}", e);
            let code = match e {
                WebhookError::InvalidSignature => "INVALID_SIGNATURE",
                WebhookError::TimestampOutOfRange => "TIMESTAMP_OUT_OF_RANGE",
                WebhookError::ParseError(_) => "MALFORMED_EVENT",
            };
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(code, "Webhook verification failed")),
            )
                .into_response();
        }
    };

    let outcome = state.reconcile_handler().handle(event).await;
    tracing::debug!(?outcome, "webhook processed");

    Json(ReceivedResponse { received: true }).into_response()
}
