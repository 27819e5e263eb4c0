//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::store_error;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::foundation::DomainError;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, google_sub, avatar_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.google_sub)
        .bind(&user.avatar_url)
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert user", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, name, google_sub, avatar_url, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch user", e))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_google_sub(&self, sub: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, google_sub, avatar_url, created_at
            FROM users WHERE google_sub = $1
            "#,
        )
        .bind(sub)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch user by subject", e))?;

        row.map(row_to_user).transpose()
    }

    async fn update_profile(
        &self,
        id: &UserId,
        name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                avatar_url = COALESCE($3, avatar_url)
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(name)
        .bind(avatar_url)
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to update profile", e))?;

        Ok(())
    }
}

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?;
    let name: Option<String> = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;
    let google_sub: Option<String> = row
        .try_get("google_sub")
        .map_err(|e| DomainError::database(format!("Failed to get google_sub: {}", e)))?;
    let avatar_url: Option<String> = row
        .try_get("avatar_url")
        .map_err(|e| DomainError::database(format!("Failed to get avatar_url: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    Ok(User {
        id: UserId::from_uuid(id),
        email,
        name,
        google_sub,
        avatar_url,
        created_at: Timestamp::from_datetime(created_at),
    })
}
