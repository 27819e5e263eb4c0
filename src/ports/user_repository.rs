//! User repository port.
//!
//! Store contract for identity records. The store enforces uniqueness of
//! email and Google subject; implementations must surface a violated
//! constraint as `ErrorCode::DuplicateRecord`, never as a string-matched
//! message.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Repository port for User persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` when the email or Google subject already exists
    /// - `DatabaseError` on any other persistence failure
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by their stable identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by their Google subject identifier.
    async fn find_by_google_sub(&self, sub: &str) -> Result<Option<User>, DomainError>;

    /// Update the mutable profile fields refreshed at login.
    async fn update_profile(
        &self,
        id: &UserId,
        name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
