//! SubmitFeedbackHandler - site feedback, optionally attributed.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::inbox::Feedback;
use crate::ports::InboxWriter;

/// Command carrying feedback. `user_id` is set by the optional bearer
/// gate when the submitter was signed in; anonymous feedback is fine.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub feedback: String,
    pub email: Option<String>,
    pub user_id: Option<UserId>,
}

/// Handler backing `POST /api/feedback`.
pub struct SubmitFeedbackHandler {
    inbox: Arc<dyn InboxWriter>,
}

impl SubmitFeedbackHandler {
    pub fn new(inbox: Arc<dyn InboxWriter>) -> Self {
        Self { inbox }
    }

    pub async fn handle(&self, cmd: SubmitFeedbackCommand) -> Result<(), DomainError> {
        let feedback = Feedback::new(cmd.feedback, cmd.email, cmd.user_id)?;
        self.inbox.add_feedback(&feedback).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn anonymous_feedback_is_recorded() {
        let store = Arc::new(InMemoryStore::new());
        SubmitFeedbackHandler::new(store.clone())
            .handle(SubmitFeedbackCommand {
                feedback: "loved the poker one".to_string(),
                email: None,
                user_id: None,
            })
            .await
            .unwrap();
        assert_eq!(store.feedback_count(), 1);
    }

    #[tokio::test]
    async fn empty_feedback_is_rejected() {
        let store = Arc::new(InMemoryStore::new());
        let err = SubmitFeedbackHandler::new(store)
            .handle(SubmitFeedbackCommand {
                feedback: " ".to_string(),
                email: None,
                user_id: Some(UserId::new()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
