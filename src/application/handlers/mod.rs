//! Application handlers, one per API operation, grouped by area.

pub mod auth;
pub mod catalog;
pub mod inbox;
pub mod interview;
pub mod purchase;
