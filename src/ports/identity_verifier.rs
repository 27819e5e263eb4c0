//! Identity verifier port (Google Sign-In).
//!
//! Verifies an ID token from the identity provider and returns the
//! verified claims. Provider-agnostic: the production adapter talks to
//! Google's JWKS endpoint, tests use a static-key verifier.

use async_trait::async_trait;

use crate::domain::foundation::AuthError;
use crate::domain::user::VerifiedIdentity;

/// Verifies identity tokens from the sign-in provider.
///
/// # Contract
///
/// Implementations must validate signature, issuer, audience, and expiry.
/// Every verification failure - bad signature, wrong audience, unknown
/// issuer, expired or malformed token - collapses to
/// `AuthError::InvalidToken`; callers cannot distinguish failure reasons.
/// `AuthError::ServiceUnavailable` is reserved for transport failures
/// reaching the provider's key material.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify an ID token and extract the identity claims.
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AuthError>;
}
