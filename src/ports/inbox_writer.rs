//! Inbox writer port (write side).
//!
//! Append-only sinks: newsletter subscribers, metaphor suggestions, and
//! feedback. Only the subscriber table has a uniqueness rule (email).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::inbox::{Feedback, Subscriber, Suggestion};

/// Write-only port over the inbox tables.
#[async_trait]
pub trait InboxWriter: Send + Sync {
    /// Record a newsletter signup.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` when the email is already subscribed
    async fn add_subscriber(&self, subscriber: &Subscriber) -> Result<(), DomainError>;

    /// Record a metaphor suggestion.
    async fn add_suggestion(&self, suggestion: &Suggestion) -> Result<(), DomainError>;

    /// Record site feedback.
    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), DomainError>;
}
