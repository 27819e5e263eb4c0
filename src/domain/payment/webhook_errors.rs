//! Error types for Stripe webhook verification and payload extraction.
//!
//! Every variant here is a malformed-payload class failure: it occurs
//! before (or while) establishing authenticity, so the sender gets a hard
//! rejection. Failures *after* authenticity is established are never
//! surfaced as errors - the handler logs them and acknowledges the event.

use thiserror::Error;

/// Errors raised before an event is accepted for reconciliation.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Signature verification failed against the shared secret.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature timestamp is outside the replay window.
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Failed to parse the signature header or the JSON payload.
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_reason() {
        assert_eq!(
            WebhookError::InvalidSignature.to_string(),
            "Invalid signature"
        );
        assert_eq!(
            WebhookError::ParseError("bad json".to_string()).to_string(),
            "Parse error: bad json"
        );
    }
}
