//! Store-backed session validation.
//!
//! Resolves bearer tokens against the session table: exact token lookup,
//! strict expiry comparison at the verification instant, then owner
//! lookup. Expired rows are left in place; only logout deletes them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, AuthError, Timestamp};
use crate::ports::{SessionRepository, SessionValidator, UserRepository};

/// `SessionValidator` implementation backed by the entitlement store.
pub struct StoreSessionValidator {
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
}

impl StoreSessionValidator {
    pub fn new(sessions: Arc<dyn SessionRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { sessions, users }
    }
}

#[async_trait]
impl SessionValidator for StoreSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let session = self
            .sessions
            .find_by_token(token)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or(AuthError::InvalidToken)?;

        // Strict comparison: a session at its exact expiry instant no
        // longer authorizes anything. The row is not deleted here.
        if !session.is_valid_at(&Timestamp::now()) {
            return Err(AuthError::TokenExpired);
        }

        let user = self
            .users
            .find_by_id(&session.user_id)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser::new(user.id, user.email, user.name))
    }
}
