//! Authentication configuration (Google Sign-In)

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Google OAuth client ID; the `aud` claim of accepted ID tokens
    /// must match this value.
    pub google_client_id: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.google_client_id.is_empty() {
            return Err(ValidationError::MissingRequired("GOOGLE_CLIENT_ID"));
        }
        // Google web client IDs end with this suffix
        if !self
            .google_client_id
            .ends_with(".apps.googleusercontent.com")
        {
            return Err(ValidationError::InvalidGoogleClientId);
        }
        Ok(())
    }
}
