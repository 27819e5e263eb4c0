//! Stripe payment integration: event types and webhook authenticity.

mod stripe_event;
mod webhook_errors;
mod webhook_verifier;

pub use stripe_event::{CheckoutMetadata, CheckoutSession, StripeEvent, StripeEventData};
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{compute_test_signature, SignatureHeader, StripeWebhookVerifier};
