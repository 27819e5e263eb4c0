//! Interview invite endpoints: token-gated, no user auth.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::interview_routes;
