//! Adapters: concrete implementations of the ports.
//!
//! - `postgres` - sqlx-backed repositories
//! - `google` - Google ID token verification (JWKS + RS256)
//! - `http` - axum REST API
//! - `memory` - in-memory store for tests

pub mod google;
pub mod http;
pub mod memory;
pub mod postgres;
