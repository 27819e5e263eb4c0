//! ValidateInviteHandler - checks an invite token before the interview UI
//! renders anything.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, InviteToken, Timestamp};
use crate::domain::interview::{InterviewInvite, InviteStatus};
use crate::ports::InviteRepository;

/// Query to validate an invite token.
#[derive(Debug, Clone)]
pub struct ValidateInviteQuery {
    pub token: InviteToken,
}

/// The invite plus whether it still accepts transitions at lookup time.
#[derive(Debug, Clone)]
pub struct InviteCheck {
    pub invite: InterviewInvite,
    pub open: bool,
}

/// Handler backing `GET /api/interview/validate/{token}`.
pub struct ValidateInviteHandler {
    invites: Arc<dyn InviteRepository>,
}

impl ValidateInviteHandler {
    pub fn new(invites: Arc<dyn InviteRepository>) -> Self {
        Self { invites }
    }

    pub async fn handle(&self, query: ValidateInviteQuery) -> Result<InviteCheck, DomainError> {
        let invite = self
            .invites
            .find_by_token(&query.token)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::InviteNotFound, "Invite not found"))?;

        let now = Timestamp::now();
        let open = invite.status != InviteStatus::Completed && !invite.is_expired(&now);
        Ok(InviteCheck { invite, open })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;

    fn invite(token: &str, days: i64) -> InterviewInvite {
        InterviewInvite {
            token: InviteToken::new(token).unwrap(),
            candidate_email: "candidate@example.com".to_string(),
            candidate_name: Some("Casey".to_string()),
            status: InviteStatus::Pending,
            expires_at: Timestamp::now().add_days(days),
            started_at: None,
            completed_at: None,
            answers: None,
        }
    }

    #[tokio::test]
    async fn live_invite_is_open() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_invite(invite("t-1", 7));

        let check = ValidateInviteHandler::new(store)
            .handle(ValidateInviteQuery {
                token: InviteToken::new("t-1").unwrap(),
            })
            .await
            .unwrap();
        assert!(check.open);
        assert_eq!(check.invite.candidate_name.as_deref(), Some("Casey"));
    }

    #[tokio::test]
    async fn expired_invite_is_closed_but_found() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_invite(invite("t-2", -1));

        let check = ValidateInviteHandler::new(store)
            .handle(ValidateInviteQuery {
                token: InviteToken::new("t-2").unwrap(),
            })
            .await
            .unwrap();
        assert!(!check.open);
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let err = ValidateInviteHandler::new(store)
            .handle(ValidateInviteQuery {
                token: InviteToken::new("missing").unwrap(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InviteNotFound);
    }
}
