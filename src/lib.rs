//! Psyche backend - metaphor catalog, purchases, and Google sign-in sessions.
//!
//! Serves the REST API behind the Psyche site: newsletter signup, a catalog
//! of purchasable metaphor content gated by entitlement, Stripe checkout
//! reconciliation, and a token-gated interview invite flow.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
