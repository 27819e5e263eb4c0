//! Auth endpoints: Google sign-in exchange, profile, logout.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
