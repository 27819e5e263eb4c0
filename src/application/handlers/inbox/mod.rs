//! Inbox command handlers: subscriptions, suggestions, feedback.

mod submit_feedback;
mod submit_suggestion;
mod subscribe;

pub use submit_feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler};
pub use submit_suggestion::{SubmitSuggestionCommand, SubmitSuggestionHandler};
pub use subscribe::{SubscribeCommand, SubscribeHandler};
