//! Session repository port.
//!
//! Store contract for bearer sessions. Expired rows accumulate until
//! revoked; expiry is checked by the caller at verification time, not by
//! the store.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::session::Session;

/// Repository port for Session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a newly issued session.
    ///
    /// No uniqueness pre-check is expected; token entropy is relied upon,
    /// and a store-level collision surfaces as a generic write failure.
    async fn insert(&self, session: &Session) -> Result<(), DomainError>;

    /// Find a session by exact token match.
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError>;

    /// Delete the session matching the token.
    ///
    /// Idempotent: deleting a nonexistent token is not an error.
    async fn delete_by_token(&self, token: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
