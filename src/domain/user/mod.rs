//! User identity records.
//!
//! Users are created on first successful Google sign-in and never deleted
//! in-flow. The store enforces at most one user per email and at most one
//! per Google subject identifier.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Claims extracted from a verified Google ID token.
///
/// Produced by the identity verifier after signature, issuer, and audience
/// checks have passed. The subject identifier is Google's stable `sub`
/// claim for the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Google subject identifier (`sub` claim).
    pub subject: String,
    /// Verified email address.
    pub email: String,
    /// Display name, when the token carries one.
    pub name: Option<String>,
    /// Avatar URL (`picture` claim), when present.
    pub avatar_url: Option<String>,
}

impl VerifiedIdentity {
    /// Creates a verified identity, rejecting empty subject or email.
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        let subject = subject.into();
        let email = email.into();
        if subject.trim().is_empty() {
            return Err(ValidationError::empty_field("subject"));
        }
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self {
            subject,
            email,
            name,
            avatar_url,
        })
    }
}

/// Identity record for a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable primary key.
    pub id: UserId,
    /// Email address, unique across users.
    pub email: String,
    /// Display name from the most recent login.
    pub name: Option<String>,
    /// Google subject identifier, unique when present.
    pub google_sub: Option<String>,
    /// Avatar URL from the identity provider.
    pub avatar_url: Option<String>,
    /// When the record was created.
    pub created_at: Timestamp,
}

impl User {
    /// Builds a new user from a verified Google identity.
    pub fn from_identity(identity: &VerifiedIdentity) -> Self {
        Self {
            id: UserId::new(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            google_sub: Some(identity.subject.clone()),
            avatar_url: identity.avatar_url.clone(),
            created_at: Timestamp::now(),
        }
    }
}
