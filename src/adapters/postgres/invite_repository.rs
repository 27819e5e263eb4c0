//! PostgreSQL implementation of InviteRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::store_error;
use crate::domain::foundation::{DomainError, ErrorCode, InviteToken, Timestamp};
use crate::domain::interview::{InterviewInvite, InviteStatus};
use crate::ports::InviteRepository;

/// PostgreSQL implementation of InviteRepository.
#[derive(Clone)]
pub struct PostgresInviteRepository {
    pool: PgPool,
}

impl PostgresInviteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PostgresInviteRepository {
    async fn find_by_token(
        &self,
        token: &InviteToken,
    ) -> Result<Option<InterviewInvite>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT token, candidate_email, candidate_name, status,
                   expires_at, started_at, completed_at, answers
            FROM interview_invites WHERE token = $1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch invite", e))?;

        row.map(row_to_invite).transpose()
    }

    async fn update(&self, invite: &InterviewInvite) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE interview_invites SET
                status = $2,
                started_at = $3,
                completed_at = $4,
                answers = $5
            WHERE token = $1
            "#,
        )
        .bind(invite.token.as_str())
        .bind(invite.status.as_str())
        .bind(invite.started_at.as_ref().map(|t| *t.as_datetime()))
        .bind(invite.completed_at.as_ref().map(|t| *t.as_datetime()))
        .bind(&invite.answers)
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to update invite", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::InviteNotFound,
                format!("Invite not found: {}", invite.token),
            ));
        }

        Ok(())
    }
}

fn row_to_invite(row: sqlx::postgres::PgRow) -> Result<InterviewInvite, DomainError> {
    let token: String = row
        .try_get("token")
        .map_err(|e| DomainError::database(format!("Failed to get token: {}", e)))?;
    let candidate_email: String = row
        .try_get("candidate_email")
        .map_err(|e| DomainError::database(format!("Failed to get candidate_email: {}", e)))?;
    let candidate_name: Option<String> = row
        .try_get("candidate_name")
        .map_err(|e| DomainError::database(format!("Failed to get candidate_name: {}", e)))?;
    let status_str: String = row
        .try_get("status")
        .map_err(|e| DomainError::database(format!("Failed to get status: {}", e)))?;
    let expires_at: chrono::DateTime<chrono::Utc> = row
        .try_get("expires_at")
        .map_err(|e| DomainError::database(format!("Failed to get expires_at: {}", e)))?;
    let started_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("started_at")
        .map_err(|e| DomainError::database(format!("Failed to get started_at: {}", e)))?;
    let completed_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("completed_at")
        .map_err(|e| DomainError::database(format!("Failed to get completed_at: {}", e)))?;
    let answers: Option<serde_json::Value> = row
        .try_get("answers")
        .map_err(|e| DomainError::database(format!("Failed to get answers: {}", e)))?;

    let status = InviteStatus::parse(&status_str)
        .ok_or_else(|| DomainError::database(format!("Invalid invite status: {}", status_str)))?;

    Ok(InterviewInvite {
        token: InviteToken::new(token)
            .map_err(|e| DomainError::database(format!("Invalid invite token: {}", e)))?,
        candidate_email,
        candidate_name,
        status,
        expires_at: Timestamp::from_datetime(expires_at),
        started_at: started_at.map(Timestamp::from_datetime),
        completed_at: completed_at.map(Timestamp::from_datetime),
        answers,
    })
}
