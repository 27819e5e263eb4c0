//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::store_error;
use crate::domain::foundation::{DomainError, SessionId, Timestamp, UserId};
use crate::domain::session::{Session, SessionToken};
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, token, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.id.as_uuid())
        .bind(session.user_id.as_uuid())
        .bind(session.token.as_str())
        .bind(session.created_at.as_datetime())
        .bind(session.expires_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert session", e))?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_id, token, created_at, expires_at FROM sessions WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn delete_by_token(&self, token: &str) -> Result<(), DomainError> {
        // Zero rows affected is fine; logout is idempotent.
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete session", e))?;

        Ok(())
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<Session, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let user_id: uuid::Uuid = row
        .try_get("user_id")
        .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;
    let token: String = row
        .try_get("token")
        .map_err(|e| DomainError::database(format!("Failed to get token: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;
    let expires_at: chrono::DateTime<chrono::Utc> = row
        .try_get("expires_at")
        .map_err(|e| DomainError::database(format!("Failed to get expires_at: {}", e)))?;

    Ok(Session {
        id: SessionId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        token: SessionToken::from_string(token),
        created_at: Timestamp::from_datetime(created_at),
        expires_at: Timestamp::from_datetime(expires_at),
    })
}
