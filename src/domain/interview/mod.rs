//! Interview invite state machine.
//!
//! Invites move `pending -> started -> completed`, one direction only.
//! An invite past its expiry, or already completed, rejects further
//! transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, InviteToken, Timestamp};

/// Lifecycle state of an interview invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    Pending,
    Started,
    Completed,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "pending",
            InviteStatus::Started => "started",
            InviteStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InviteStatus::Pending),
            "started" => Some(InviteStatus::Started),
            "completed" => Some(InviteStatus::Completed),
            _ => None,
        }
    }
}

/// A token-gated interview invite for a recruiting candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewInvite {
    pub token: InviteToken,
    pub candidate_email: String,
    pub candidate_name: Option<String>,
    pub status: InviteStatus,
    pub expires_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    /// Questionnaire answers captured at submission.
    pub answers: Option<serde_json::Value>,
}

impl InterviewInvite {
    /// True when the invite's expiry has passed at `now`.
    pub fn is_expired(&self, now: &Timestamp) -> bool {
        !self.expires_at.is_after(now)
    }

    /// Marks the invite started.
    ///
    /// Only a pending, unexpired invite can start; starting twice is
    /// rejected as an invalid transition.
    pub fn start(&mut self, now: Timestamp) -> Result<(), DomainError> {
        self.guard_open(&now)?;
        match self.status {
            InviteStatus::Pending => {
                self.status = InviteStatus::Started;
                self.started_at = Some(now);
                Ok(())
            }
            InviteStatus::Started => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Interview already started",
            )),
            InviteStatus::Completed => unreachable!("guarded above"),
        }
    }

    /// Records the submitted answers and completes the invite.
    ///
    /// Accepted from `pending` or `started` (the transition is monotonic
    /// either way); rejected once completed or expired.
    pub fn submit(
        &mut self,
        answers: serde_json::Value,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        self.guard_open(&now)?;
        self.status = InviteStatus::Completed;
        self.completed_at = Some(now);
        self.answers = Some(answers);
        Ok(())
    }

    fn guard_open(&self, now: &Timestamp) -> Result<(), DomainError> {
        if self.status == InviteStatus::Completed {
            return Err(DomainError::new(
                ErrorCode::InviteClosed,
                "Interview already completed",
            ));
        }
        if self.is_expired(now) {
            return Err(DomainError::new(
                ErrorCode::InviteExpired,
                "Interview invite has expired",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invite() -> InterviewInvite {
        InterviewInvite {
            token: InviteToken::new("inv-token-1").unwrap(),
            candidate_email: "candidate@example.com".to_string(),
            candidate_name: None,
            status: InviteStatus::Pending,
            expires_at: Timestamp::now().add_days(7),
            started_at: None,
            completed_at: None,
            answers: None,
        }
    }

    #[test]
    fn pending_invite_starts_once() {
        let mut inv = invite();
        assert!(inv.start(Timestamp::now()).is_ok());
        assert_eq!(inv.status, InviteStatus::Started);
        let second = inv.start(Timestamp::now());
        assert_eq!(
            second.unwrap_err().code,
            ErrorCode::InvalidStateTransition
        );
    }

    #[test]
    fn submit_completes_and_locks_the_invite() {
        let mut inv = invite();
        inv.start(Timestamp::now()).unwrap();
        inv.submit(json!({"q1": "a1"}), Timestamp::now()).unwrap();
        assert_eq!(inv.status, InviteStatus::Completed);

        let again = inv.submit(json!({}), Timestamp::now());
        assert_eq!(again.unwrap_err().code, ErrorCode::InviteClosed);
    }

    #[test]
    fn submit_from_pending_is_monotonic_forward() {
        let mut inv = invite();
        assert!(inv.submit(json!({}), Timestamp::now()).is_ok());
        assert_eq!(inv.status, InviteStatus::Completed);
    }

    #[test]
    fn expired_invite_rejects_everything() {
        let mut inv = invite();
        inv.expires_at = Timestamp::now().add_days(-1);
        let now = Timestamp::now();
        assert_eq!(
            inv.start(now).unwrap_err().code,
            ErrorCode::InviteExpired
        );
        assert_eq!(
            inv.submit(json!({}), now).unwrap_err().code,
            ErrorCode::InviteExpired
        );
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let inv = invite();
        assert!(inv.is_expired(&inv.expires_at));
        assert!(!inv.is_expired(&inv.expires_at.add_seconds(-1)));
    }
}
