//! Write-only inbox records: newsletter signups, metaphor suggestions,
//! and feedback.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Newsletter subscriber. Email is unique in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub subscribed_at: Timestamp,
}

impl Subscriber {
    /// Creates a subscriber record, rejecting an empty email.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self {
            email,
            subscribed_at: Timestamp::now(),
        })
    }
}

/// A reader-submitted metaphor suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggestion: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub inspiration: Option<String>,
    pub submitted_at: Timestamp,
}

impl Suggestion {
    /// Creates a suggestion, rejecting an empty body.
    pub fn new(
        suggestion: impl Into<String>,
        name: Option<String>,
        email: Option<String>,
        inspiration: Option<String>,
    ) -> Result<Self, ValidationError> {
        let suggestion = suggestion.into();
        if suggestion.trim().is_empty() {
            return Err(ValidationError::empty_field("suggestion"));
        }
        Ok(Self {
            suggestion,
            name,
            email,
            inspiration,
            submitted_at: Timestamp::now(),
        })
    }
}

/// Site feedback, optionally attributed to a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub feedback: String,
    pub email: Option<String>,
    /// Set when the submitter presented a valid bearer token.
    pub user_id: Option<UserId>,
    pub submitted_at: Timestamp,
}

impl Feedback {
    /// Creates a feedback record, rejecting an empty body.
    pub fn new(
        feedback: impl Into<String>,
        email: Option<String>,
        user_id: Option<UserId>,
    ) -> Result<Self, ValidationError> {
        let feedback = feedback.into();
        if feedback.trim().is_empty() {
            return Err(ValidationError::empty_field("feedback"));
        }
        Ok(Self {
            feedback,
            email,
            user_id,
            submitted_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_rejects_empty_email() {
        assert!(Subscriber::new("").is_err());
        assert!(Subscriber::new("a@b.c").is_ok());
    }

    #[test]
    fn suggestion_requires_body() {
        assert!(Suggestion::new("  ", None, None, None).is_err());
    }

    #[test]
    fn feedback_keeps_optional_attribution() {
        let fb = Feedback::new("great site", None, Some(UserId::new())).unwrap();
        assert!(fb.user_id.is_some());
    }
}
