//! GetProfileHandler - loads the signed-in user's profile row.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Query for the authenticated user's own profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

/// Handler backing `GET /api/auth/me`.
pub struct GetProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl GetProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<User, DomainError> {
        self.users
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))
    }
}
