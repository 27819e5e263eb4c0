//! Application layer: command/query handlers and the session gate.

mod auth_gate;
pub mod handlers;

pub use auth_gate::StoreSessionValidator;
