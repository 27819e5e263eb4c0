//! Stripe webhook event types.
//!
//! Only the fields reconciliation needs are captured; the rest of Stripe's
//! event schema is ignored. The entitlement reference travels as two
//! structured metadata fields (`user_id`, `metaphor_id`) set when the
//! checkout session is created - never as a compound reference string.

use serde::{Deserialize, Serialize};

/// Stripe webhook event (simplified).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: StripeEventData,

    /// Whether this is a live mode event (vs test mode).
    #[serde(default)]
    pub livemode: bool,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEventData {
    /// The object that triggered the event (polymorphic by event type).
    pub object: serde_json::Value,
}

impl StripeEvent {
    /// True when this is a completed checkout session.
    pub fn is_checkout_completed(&self) -> bool {
        self.event_type == "checkout.session.completed"
    }

    /// Extracts the checkout session from the event data.
    pub fn checkout_session(&self) -> Result<CheckoutSession, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// The slice of a Stripe checkout session object we reconcile against.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutSession {
    /// Checkout session id (cs_xxx).
    pub id: String,

    /// Customer email, for logging only - never used for entitlement.
    #[serde(default)]
    pub customer_email: Option<String>,

    /// Total amount in cents, when present.
    #[serde(default)]
    pub amount_total: Option<i64>,

    /// Structured metadata set at checkout creation time.
    #[serde(default)]
    pub metadata: CheckoutMetadata,
}

/// Metadata fields carried on the checkout session.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckoutMetadata {
    /// The purchasing user's stable identifier.
    #[serde(default)]
    pub user_id: Option<String>,

    /// The metaphor being purchased.
    #[serde(default)]
    pub metaphor_id: Option<String>,
}
