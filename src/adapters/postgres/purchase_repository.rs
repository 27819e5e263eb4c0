//! PostgreSQL implementation of PurchaseRepository.
//!
//! `user_purchases` carries a unique (user_id, metaphor_id) constraint;
//! `insert` lets the violation surface as a typed conflict while
//! `insert_many` tolerates it with ON CONFLICT DO NOTHING.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store_error;
use crate::domain::foundation::{DomainError, MetaphorId, UserId, ValidationError};
use crate::domain::purchase::Purchase;
use crate::ports::PurchaseRepository;

/// PostgreSQL implementation of PurchaseRepository.
#[derive(Clone)]
pub struct PostgresPurchaseRepository {
    pool: PgPool,
}

impl PostgresPurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRepository for PostgresPurchaseRepository {
    async fn exists(
        &self,
        user_id: &UserId,
        metaphor_id: &MetaphorId,
    ) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM user_purchases WHERE user_id = $1 AND metaphor_id = $2",
        )
        .bind(user_id.as_uuid())
        .bind(metaphor_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("Failed to check purchase existence", e))?;

        Ok(result.0 > 0)
    }

    async fn insert(&self, purchase: &Purchase) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_purchases (
                user_id, metaphor_id, email, name, price_cents, purchased_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(purchase.user_id.as_uuid())
        .bind(purchase.metaphor_id.as_str())
        .bind(&purchase.email)
        .bind(&purchase.name)
        .bind(purchase.price_cents)
        .bind(purchase.purchased_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert purchase", e))?;

        Ok(())
    }

    async fn insert_many(&self, batch: &[Purchase]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| store_error("Failed to begin purchase batch", e))?;

        for purchase in batch {
            sqlx::query(
                r#"
                INSERT INTO user_purchases (
                    user_id, metaphor_id, email, name, price_cents, purchased_at
                ) VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (user_id, metaphor_id) DO NOTHING
                "#,
            )
            .bind(purchase.user_id.as_uuid())
            .bind(purchase.metaphor_id.as_str())
            .bind(&purchase.email)
            .bind(&purchase.name)
            .bind(purchase.price_cents)
            .bind(purchase.purchased_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| store_error("Failed to insert purchase batch row", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| store_error("Failed to commit purchase batch", e))?;

        Ok(())
    }

    async fn owned_subset(
        &self,
        user_id: &UserId,
        metaphor_ids: &[MetaphorId],
    ) -> Result<Vec<MetaphorId>, DomainError> {
        let slugs: Vec<&str> = metaphor_ids.iter().map(|id| id.as_str()).collect();
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT metaphor_id FROM user_purchases
            WHERE user_id = $1 AND metaphor_id = ANY($2)
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(&slugs)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch owned subset", e))?;

        rows.into_iter().map(|(slug,)| parse_slug(slug)).collect()
    }

    async fn list_metaphor_ids(&self, user_id: &UserId) -> Result<Vec<MetaphorId>, DomainError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT metaphor_id FROM user_purchases
            WHERE user_id = $1
            ORDER BY purchased_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to list purchases", e))?;

        rows.into_iter().map(|(slug,)| parse_slug(slug)).collect()
    }
}

fn parse_slug(slug: String) -> Result<MetaphorId, DomainError> {
    MetaphorId::new(slug).map_err(|e: ValidationError| {
        DomainError::database(format!("Invalid metaphor_id in store: {}", e))
    })
}
