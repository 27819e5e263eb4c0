//! Domain layer: pure types and invariants, no I/O.

pub mod catalog;
pub mod foundation;
pub mod inbox;
pub mod interview;
pub mod payment;
pub mod purchase;
pub mod session;
pub mod user;
