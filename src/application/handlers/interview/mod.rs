//! Interview invite command and query handlers.

mod start_interview;
mod submit_interview;
mod validate_invite;

pub use start_interview::{StartInterviewCommand, StartInterviewHandler};
pub use submit_interview::{SubmitInterviewCommand, SubmitInterviewHandler};
pub use validate_invite::{InviteCheck, ValidateInviteHandler, ValidateInviteQuery};
