//! HTTP error mapping.
//!
//! Domain and auth errors become JSON bodies with a human-readable
//! `error` and a stable `code`. Conflicts (already owned, duplicate
//! subscription) map to 400 to keep the public wire contract stable.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};

/// JSON error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Error type returned by the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Auth(AuthError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

fn domain_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::AlreadyOwned
        | ErrorCode::DuplicateRecord
        | ErrorCode::InviteExpired
        | ErrorCode::InviteClosed
        | ErrorCode::InvalidStateTransition => StatusCode::BAD_REQUEST,
        ErrorCode::UserNotFound
        | ErrorCode::MetaphorNotFound
        | ErrorCode::BundleNotFound
        | ErrorCode::SessionNotFound
        | ErrorCode::InviteNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Domain(err) => {
                let status = domain_status(err.code);
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    // Store details stay in the logs, not the response.
                    tracing::error!("request failed: {}", err);
                    (
                        status,
                        ErrorResponse::new(err.code.to_string(), "Internal server error"),
                    )
                } else {
                    (status, ErrorResponse::new(err.code.to_string(), err.message))
                }
            }
            ApiError::Auth(err) => auth_error_response(&err),
        };

        (status, Json(body)).into_response()
    }
}

/// `Json` with the contract's rejection.
///
/// axum's default `Json` extractor answers 422 for a missing or mistyped
/// body field; the public contract reports those as 400 validation
/// errors, so body extraction routes through `ApiError` instead.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    fn from_request<'life0, 'async_trait>(
        req: Request,
        state: &'life0 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(ApiJson(value)),
                Err(rejection) => Err(ApiError::Domain(DomainError::validation(
                    rejection.body_text(),
                ))),
            }
        })
    }
}

/// Maps an auth error to a response. Missing and invalid credentials are
/// distinct codes so clients can tell "log in" from "log in again".
pub fn auth_error_response(err: &AuthError) -> (StatusCode, ErrorResponse) {
    match err {
        AuthError::MissingCredentials => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("AUTH_REQUIRED", "Authentication required"),
        ),
        AuthError::InvalidToken => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("INVALID_TOKEN", "Invalid token"),
        ),
        AuthError::TokenExpired => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("TOKEN_EXPIRED", "Session expired"),
        ),
        AuthError::UserNotFound => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("INVALID_TOKEN", "Invalid token"),
        ),
        // Store or provider failures during auth are server errors like
        // any other store failure; details stay in the logs.
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("auth dependency failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
            )
        }
    }
}
