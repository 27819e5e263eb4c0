//! Stripe webhook endpoint: signature-gated, never user-authenticated.

pub mod handlers;
pub mod routes;

pub use routes::webhook_routes;
