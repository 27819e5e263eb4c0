//! SubscribeHandler - newsletter signups.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::inbox::Subscriber;
use crate::ports::InboxWriter;

/// Command to add a newsletter subscriber.
#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    pub email: String,
}

/// Handler backing `POST /api/subscribe`. A repeat signup for the same
/// email is reported as a conflict, not silently absorbed.
pub struct SubscribeHandler {
    inbox: Arc<dyn InboxWriter>,
}

impl SubscribeHandler {
    pub fn new(inbox: Arc<dyn InboxWriter>) -> Self {
        Self { inbox }
    }

    pub async fn handle(&self, cmd: SubscribeCommand) -> Result<(), DomainError> {
        let subscriber = Subscriber::new(cmd.email)?;
        match self.inbox.add_subscriber(&subscriber).await {
            Err(e) if e.is_duplicate() => Err(DomainError::new(
                ErrorCode::DuplicateRecord,
                "Email already subscribed",
            )),
            other => other,
        }
    }
}
