//! Foundation types shared by every domain module.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BundleId, InviteToken, MetaphorId, SessionId, UserId};
pub use timestamp::Timestamp;
