//! LogoutHandler - revokes a bearer session.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::SessionRepository;

/// Command to revoke the presented session token.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub token: String,
}

/// Handler for logout. Deleting an unknown or already-deleted token is a
/// no-op; logout is idempotent.
pub struct LogoutHandler {
    sessions: Arc<dyn SessionRepository>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: LogoutCommand) -> Result<(), DomainError> {
        self.sessions.delete_by_token(&cmd.token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::UserId;
    use crate::domain::session::Session;

    #[tokio::test]
    async fn logout_deletes_the_session_row() {
        let store = Arc::new(InMemoryStore::new());
        let session = Session::issue(UserId::new());
        store.insert(&session).await.unwrap();

        LogoutHandler::new(store.clone())
            .handle(LogoutCommand {
                token: session.token.as_str().to_string(),
            })
            .await
            .unwrap();

        assert!(store
            .find_by_token(session.token.as_str())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn second_logout_is_a_no_op() {
        let store = Arc::new(InMemoryStore::new());
        let session = Session::issue(UserId::new());
        store.insert(&session).await.unwrap();

        let handler = LogoutHandler::new(store.clone());
        let cmd = LogoutCommand {
            token: session.token.as_str().to_string(),
        };
        handler.handle(cmd.clone()).await.unwrap();
        handler.handle(cmd).await.unwrap();
        assert_eq!(store.session_count(), 0);
    }
}
