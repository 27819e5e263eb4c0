//! SubmitSuggestionHandler - reader-submitted metaphor ideas.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::inbox::Suggestion;
use crate::ports::InboxWriter;

/// Command carrying a metaphor suggestion; only the body is required.
#[derive(Debug, Clone)]
pub struct SubmitSuggestionCommand {
    pub suggestion: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub inspiration: Option<String>,
}

/// Handler backing `POST /api/metaphor-suggestions`.
pub struct SubmitSuggestionHandler {
    inbox: Arc<dyn InboxWriter>,
}

impl SubmitSuggestionHandler {
    pub fn new(inbox: Arc<dyn InboxWriter>) -> Self {
        Self { inbox }
    }

    pub async fn handle(&self, cmd: SubmitSuggestionCommand) -> Result<(), DomainError> {
        let suggestion =
            Suggestion::new(cmd.suggestion, cmd.name, cmd.email, cmd.inspiration)?;
        self.inbox.add_suggestion(&suggestion).await
    }
}
