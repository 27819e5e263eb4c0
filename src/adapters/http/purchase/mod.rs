//! Purchase endpoints: single purchases, bundles, and the owned list.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{purchase_routes, user_routes};
