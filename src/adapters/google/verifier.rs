//! Google Sign-In adapter for ID token verification.
//!
//! Implements the `IdentityVerifier` port against Google's OIDC keys:
//!
//! 1. Fetches Google's JWKS (cached with expiry tracking)
//! 2. Validates the token signature against the matching public key
//! 3. Validates issuer, audience, and expiry claims
//! 4. Maps the claims to a domain `VerifiedIdentity`
//!
//! Every verification failure collapses to `AuthError::InvalidToken`;
//! callers never learn whether the signature, audience, or expiry was at
//! fault. `ServiceUnavailable` is reserved for trouble reaching Google's
//! key endpoint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{
    decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, TokenData, Validation,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::foundation::AuthError;
use crate::domain::user::VerifiedIdentity;
use crate::ports::IdentityVerifier;

/// Where Google publishes the signing keys for ID tokens.
const GOOGLE_JWKS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

/// Google issues ID tokens under either form.
const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Claims we read from a Google ID token.
#[derive(Debug, Deserialize)]
struct GoogleClaims {
    sub: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// Cached JWKS with expiry tracking.
struct JwksCache {
    jwks: JwkSet,
    fetched_at: Instant,
    cache_duration: Duration,
}

impl JwksCache {
    fn new(jwks: JwkSet, cache_duration: Duration) -> Self {
        Self {
            jwks,
            fetched_at: Instant::now(),
            cache_duration,
        }
    }

    fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() > self.cache_duration
    }
}

/// Production `IdentityVerifier` backed by Google's JWKS endpoint.
pub struct GoogleIdentityVerifier {
    client_id: String,
    http_client: reqwest::Client,
    jwks_cache: Arc<RwLock<Option<JwksCache>>>,
    cache_duration: Duration,
}

impl GoogleIdentityVerifier {
    /// Creates a verifier for the given OAuth client id.
    ///
    /// Keys are fetched lazily on first verification, not at startup.
    pub fn new(client_id: impl Into<String>) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuthError::service_unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client_id: client_id.into(),
            http_client,
            jwks_cache: Arc::new(RwLock::new(None)),
            cache_duration: Duration::from_secs(3600),
        })
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthError> {
        tracing::debug!("fetching Google JWKS");

        let response = self
            .http_client
            .get(GOOGLE_JWKS_URL)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("failed to fetch Google JWKS: {}", e);
                AuthError::service_unavailable(format!("Failed to fetch JWKS: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Google JWKS endpoint returned {}", status);
            return Err(AuthError::service_unavailable(format!(
                "JWKS endpoint returned {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("failed to parse Google JWKS: {}", e);
            AuthError::service_unavailable(format!("Failed to parse JWKS: {}", e))
        })
    }

    async fn get_jwks(&self) -> Result<JwkSet, AuthError> {
        {
            let cache = self.jwks_cache.read().await;
            if let Some(ref cached) = *cache {
                if !cached.is_expired() {
                    return Ok(cached.jwks.clone());
                }
            }
        }

        let jwks = self.fetch_jwks().await?;

        {
            let mut cache = self.jwks_cache.write().await;
            *cache = Some(JwksCache::new(jwks.clone(), self.cache_duration));
        }

        Ok(jwks)
    }

    fn find_decoding_key(
        &self,
        header: &jsonwebtoken::Header,
        jwks: &JwkSet,
    ) -> Result<DecodingKey, AuthError> {
        let kid = header.kid.as_ref().ok_or_else(|| {
            tracing::warn!("ID token missing 'kid' header");
            AuthError::InvalidToken
        })?;

        let jwk = jwks.find(kid).ok_or_else(|| {
            tracing::warn!("no Google key for kid {}", kid);
            AuthError::InvalidToken
        })?;

        DecodingKey::from_jwk(jwk).map_err(|e| {
            tracing::warn!("failed to build decoding key: {}", e);
            AuthError::InvalidToken
        })
    }

    fn validate_token(
        &self,
        token: &str,
        decoding_key: &DecodingKey,
    ) -> Result<TokenData<GoogleClaims>, AuthError> {
        // Google signs ID tokens with RS256.
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation.set_audience(&[&self.client_id]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        decode::<GoogleClaims>(token, decoding_key, &validation).map_err(|e| {
            tracing::warn!("ID token validation failed: {}", e);
            AuthError::InvalidToken
        })
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AuthError> {
        let header = decode_header(id_token).map_err(|e| {
            tracing::debug!("failed to decode ID token header: {}", e);
            AuthError::InvalidToken
        })?;

        let jwks = self.get_jwks().await?;
        let decoding_key = self.find_decoding_key(&header, &jwks)?;
        let claims = self.validate_token(id_token, &decoding_key)?.claims;

        VerifiedIdentity::new(claims.sub, claims.email, claims.name, claims.picture)
            .map_err(|_| AuthError::InvalidToken)
    }
}

impl std::fmt::Debug for GoogleIdentityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleIdentityVerifier")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
