//! Catalog endpoints: listing, lookup, and gated content.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
