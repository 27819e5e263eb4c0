//! Interview invite repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, InviteToken};
use crate::domain::interview::InterviewInvite;

/// Repository port for interview invites.
///
/// Invites are created out-of-band by the recruiting flow; the service
/// reads them by token and persists status transitions.
#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Find an invite by its token.
    async fn find_by_token(
        &self,
        token: &InviteToken,
    ) -> Result<Option<InterviewInvite>, DomainError>;

    /// Persist an invite's current state (status, timestamps, answers).
    async fn update(&self, invite: &InterviewInvite) -> Result<(), DomainError>;
}
