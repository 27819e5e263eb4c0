//! Mock identity verifier for tests.
//!
//! Maps literal token strings to verified identities so login flows can
//! be exercised without Google. Unknown tokens return `InvalidToken`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::AuthError;
use crate::domain::user::VerifiedIdentity;
use crate::ports::IdentityVerifier;

/// Mock `IdentityVerifier` backed by a token-to-identity map.
#[derive(Debug, Default)]
pub struct MockIdentityVerifier {
    identities: RwLock<HashMap<String, VerifiedIdentity>>,
}

impl MockIdentityVerifier {
    /// Creates a mock verifier that rejects everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token the verifier will accept.
    pub fn with_identity(self, token: impl Into<String>, identity: VerifiedIdentity) -> Self {
        self.identities
            .write()
            .unwrap()
            .insert(token.into(), identity);
        self
    }
}

#[async_trait]
impl IdentityVerifier for MockIdentityVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AuthError> {
        self.identities
            .read()
            .unwrap()
            .get(id_token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
