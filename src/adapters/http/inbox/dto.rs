//! Wire types for the inbox endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/subscribe`.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Body of `POST /api/metaphor-suggestions`.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub suggestion: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub inspiration: Option<String>,
}

/// Body of `POST /api/feedback`.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Acknowledgement for inbox writes.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
}
