//! Inbox endpoints: newsletter, suggestions, feedback.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::inbox_routes;
