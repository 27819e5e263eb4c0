//! Wire types for the interview invite endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::interview::InviteCheck;
use crate::domain::interview::InterviewInvite;

/// Response of the validate endpoint.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub status: String,
    pub candidate_name: Option<String>,
    pub expires_at: String,
}

impl From<&InviteCheck> for ValidateResponse {
    fn from(check: &InviteCheck) -> Self {
        Self {
            valid: check.open,
            status: check.invite.status.as_str().to_string(),
            candidate_name: check.invite.candidate_name.clone(),
            expires_at: check.invite.expires_at.to_rfc3339(),
        }
    }
}

/// Body of the submit endpoint: free-form questionnaire answers.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub answers: serde_json::Value,
}

/// Response after a state transition.
#[derive(Debug, Serialize)]
pub struct InviteStatusResponse {
    pub status: String,
}

impl From<&InterviewInvite> for InviteStatusResponse {
    fn from(invite: &InterviewInvite) -> Self {
        Self {
            status: invite.status.as_str().to_string(),
        }
    }
}
