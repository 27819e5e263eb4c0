//! PostgreSQL implementation of InboxWriter.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store_error;
use crate::domain::foundation::DomainError;
use crate::domain::inbox::{Feedback, Subscriber, Suggestion};
use crate::ports::InboxWriter;

/// PostgreSQL implementation of InboxWriter.
#[derive(Clone)]
pub struct PostgresInboxWriter {
    pool: PgPool,
}

impl PostgresInboxWriter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InboxWriter for PostgresInboxWriter {
    async fn add_subscriber(&self, subscriber: &Subscriber) -> Result<(), DomainError> {
        // email is unique; a repeat signup surfaces as a typed conflict.
        sqlx::query("INSERT INTO subscribers (email, subscribed_at) VALUES ($1, $2)")
            .bind(&subscriber.email)
            .bind(subscriber.subscribed_at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to insert subscriber", e))?;

        Ok(())
    }

    async fn add_suggestion(&self, suggestion: &Suggestion) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO metaphor_suggestions (
                suggestion, name, email, inspiration, submitted_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&suggestion.suggestion)
        .bind(&suggestion.name)
        .bind(&suggestion.email)
        .bind(&suggestion.inspiration)
        .bind(suggestion.submitted_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert suggestion", e))?;

        Ok(())
    }

    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO feedback (feedback, email, user_id, submitted_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&feedback.feedback)
        .bind(&feedback.email)
        .bind(feedback.user_id.as_ref().map(|id| *id.as_uuid()))
        .bind(feedback.submitted_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert feedback", e))?;

        Ok(())
    }
}
