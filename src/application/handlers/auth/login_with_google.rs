//! LoginWithGoogleHandler - exchanges a Google ID token for a session.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::domain::session::Session;
use crate::domain::user::User;
use crate::ports::{IdentityVerifier, SessionRepository, UserRepository};

/// Command carrying the raw ID token from the sign-in widget.
#[derive(Debug, Clone)]
pub struct LoginWithGoogleCommand {
    pub id_token: String,
}

/// Result of a successful login: the profile and a fresh bearer session.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub session: Session,
}

/// Handler for the Google sign-in exchange.
///
/// Verify the token, map the Google subject to a user (creating one on
/// first login), then issue a session. The subject-to-user mapping stays
/// injective under concurrent first logins: the store's unique constraint
/// on the subject makes the losing insert surface as a typed conflict,
/// after which this handler re-reads the winner's row.
pub struct LoginWithGoogleHandler {
    verifier: Arc<dyn IdentityVerifier>,
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
}

impl LoginWithGoogleHandler {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            verifier,
            users,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: LoginWithGoogleCommand) -> Result<LoginResult, AuthError> {
        let identity = self.verifier.verify(&cmd.id_token).await?;

        let user = match self
            .users
            .find_by_google_sub(&identity.subject)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
        {
            Some(mut existing) => {
                // Refresh the profile from the latest token claims.
                if identity.name.is_some() || identity.avatar_url.is_some() {
                    self.users
                        .update_profile(
                            &existing.id,
                            identity.name.as_deref(),
                            identity.avatar_url.as_deref(),
                        )
                        .await
                        .map_err(|e| AuthError::service_unavailable(e.to_string()))?;
                    existing.name = identity.name.clone().or(existing.name);
                    existing.avatar_url = identity.avatar_url.clone().or(existing.avatar_url);
                }
                existing
            }
            None => {
                let candidate = User::from_identity(&identity);
                match self.users.create(&candidate).await {
                    Ok(()) => candidate,
                    // Lost a concurrent first-login race; the winner's row
                    // is authoritative.
                    Err(e) if e.is_duplicate() => self
                        .users
                        .find_by_google_sub(&identity.subject)
                        .await
                        .map_err(|e| AuthError::service_unavailable(e.to_string()))?
                        .ok_or_else(|| {
                            AuthError::service_unavailable("conflicting account record")
                        })?,
                    Err(e) => return Err(AuthError::service_unavailable(e.to_string())),
                }
            }
        };

        let session = Session::issue(user.id);
        self.sessions
            .insert(&session)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(LoginResult { user, session })
    }
}
