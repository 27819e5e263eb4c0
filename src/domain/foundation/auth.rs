//! Authentication types shared across the request path.
//!
//! `AuthenticatedUser` is what the bearer-session gate hands to handlers
//! once a token has been resolved against the store. `AuthError` is
//! domain-centric; neither type knows about Google or HTTP.

use super::UserId;
use thiserror::Error;

/// User resolved from a valid bearer session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The stable user identifier.
    pub id: UserId,

    /// User's email address.
    pub email: String,

    /// Display name if known.
    pub name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name,
        }
    }
}

/// Authentication failures.
///
/// Missing and invalid credentials are distinct: the gate reports
/// `MissingCredentials` when no bearer token was presented at all, and
/// `InvalidToken`/`TokenExpired` when one was presented but did not
/// resolve to a live session. All are terminal for the request.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No bearer token was presented.
    #[error("Authentication required")]
    MissingCredentials,

    /// The credential is malformed, unknown, or failed verification.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The session exists but its expiry has passed.
    #[error("Session expired")]
    TokenExpired,

    /// The session resolved to a user that no longer exists.
    #[error("User not found")]
    UserNotFound,

    /// The identity provider or store is unreachable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
