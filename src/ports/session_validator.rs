//! Session validation port for bearer tokens.
//!
//! The HTTP auth middleware depends on this trait rather than on the
//! store directly, so the gate can be exercised in tests without a
//! database.

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, AuthError};

/// Resolves a bearer session token to an authenticated user.
///
/// # Contract
///
/// - `Ok(user)` only when the token matches a session whose expiry is
///   strictly in the future
/// - `Err(InvalidToken)` for unknown tokens
/// - `Err(TokenExpired)` for sessions at or past their expiry instant
/// - `Err(UserNotFound)` when the session's owner no longer exists
/// - Validation must not delete expired rows as a side effect
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a bearer token (without the `Bearer ` prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
