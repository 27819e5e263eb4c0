//! StartInterviewHandler - moves an invite from pending to started.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, InviteToken, Timestamp};
use crate::domain::interview::InterviewInvite;
use crate::ports::InviteRepository;

/// Command to mark an interview as started.
#[derive(Debug, Clone)]
pub struct StartInterviewCommand {
    pub token: InviteToken,
}

/// Handler backing `POST /api/interview/start/{token}`.
pub struct StartInterviewHandler {
    invites: Arc<dyn InviteRepository>,
}

impl StartInterviewHandler {
    pub fn new(invites: Arc<dyn InviteRepository>) -> Self {
        Self { invites }
    }

    pub async fn handle(
        &self,
        cmd: StartInterviewCommand,
    ) -> Result<InterviewInvite, DomainError> {
        let mut invite = self
            .invites
            .find_by_token(&cmd.token)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::InviteNotFound, "Invite not found"))?;

        invite.start(Timestamp::now())?;
        self.invites.update(&invite).await?;
        Ok(invite)
    }
}
