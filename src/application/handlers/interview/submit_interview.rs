//! SubmitInterviewHandler - records answers and completes the invite.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, InviteToken, Timestamp};
use crate::domain::interview::InterviewInvite;
use crate::ports::InviteRepository;

/// Command carrying the questionnaire answers.
#[derive(Debug, Clone)]
pub struct SubmitInterviewCommand {
    pub token: InviteToken,
    pub answers: serde_json::Value,
}

/// Handler backing `POST /api/interview/submit/{token}`.
pub struct SubmitInterviewHandler {
    invites: Arc<dyn InviteRepository>,
}

impl SubmitInterviewHandler {
    pub fn new(invites: Arc<dyn InviteRepository>) -> Self {
        Self { invites }
    }

    pub async fn handle(
        &self,
        cmd: SubmitInterviewCommand,
    ) -> Result<InterviewInvite, DomainError> {
        let mut invite = self
            .invites
            .find_by_token(&cmd.token)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::InviteNotFound, "Invite not found"))?;

        invite.submit(cmd.answers, Timestamp::now())?;
        self.invites.update(&invite).await?;
        Ok(invite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::interview::InviteStatus;
    use serde_json::json;

    fn invite(days: i64) -> InterviewInvite {
        InterviewInvite {
            token: InviteToken::new("t-1").unwrap(),
            candidate_email: "candidate@example.com".to_string(),
            candidate_name: None,
            status: InviteStatus::Pending,
            expires_at: Timestamp::now().add_days(days),
            started_at: None,
            completed_at: None,
            answers: None,
        }
    }

    fn cmd() -> SubmitInterviewCommand {
        SubmitInterviewCommand {
            token: InviteToken::new("t-1").unwrap(),
            answers: json!({"q1": "a1"}),
        }
    }

    #[tokio::test]
    async fn submission_completes_and_stores_answers() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_invite(invite(7));

        let completed = SubmitInterviewHandler::new(store.clone())
            .handle(cmd())
            .await
            .unwrap();
        assert_eq!(completed.status, InviteStatus::Completed);

        let reloaded = store
            .find_by_token(&InviteToken::new("t-1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.answers, Some(json!({"q1": "a1"})));
    }

    #[tokio::test]
    async fn completed_invite_rejects_resubmission() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_invite(invite(7));
        let handler = SubmitInterviewHandler::new(store);

        handler.handle(cmd()).await.unwrap();
        let err = handler.handle(cmd()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InviteClosed);
    }

    #[tokio::test]
    async fn expired_invite_rejects_submission() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_invite(invite(-1));

        let err = SubmitInterviewHandler::new(store)
            .handle(cmd())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InviteExpired);
    }
}
