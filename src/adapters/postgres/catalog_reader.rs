//! PostgreSQL implementation of CatalogReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::store_error;
use crate::domain::catalog::{Bundle, Metaphor, MetaphorStatus};
use crate::domain::foundation::{BundleId, DomainError, MetaphorId};
use crate::ports::CatalogReader;

const METAPHOR_COLUMNS: &str =
    "id, title, order_index, preview_content, full_content, price_cents, status";

/// PostgreSQL implementation of CatalogReader.
#[derive(Clone)]
pub struct PostgresCatalogReader {
    pool: PgPool,
}

impl PostgresCatalogReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogReader for PostgresCatalogReader {
    async fn list_metaphors(&self) -> Result<Vec<Metaphor>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM metaphors ORDER BY order_index",
            METAPHOR_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to list metaphors", e))?;

        rows.into_iter().map(row_to_metaphor).collect()
    }

    async fn find_metaphor(&self, id: &MetaphorId) -> Result<Option<Metaphor>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM metaphors WHERE id = $1",
            METAPHOR_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch metaphor", e))?;

        row.map(row_to_metaphor).transpose()
    }

    async fn find_bundle(&self, id: &BundleId) -> Result<Option<Bundle>, DomainError> {
        // Inactive bundles are not purchasable; the reader treats them
        // as absent.
        let row = sqlx::query(
            r#"
            SELECT id, name, price_cents, metaphor_ids, active
            FROM bundles WHERE id = $1 AND active
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch bundle", e))?;

        row.map(row_to_bundle).transpose()
    }
}

fn row_to_metaphor(row: sqlx::postgres::PgRow) -> Result<Metaphor, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| DomainError::database(format!("Failed to get title: {}", e)))?;
    let order_index: i32 = row
        .try_get("order_index")
        .map_err(|e| DomainError::database(format!("Failed to get order_index: {}", e)))?;
    let preview_content: String = row
        .try_get("preview_content")
        .map_err(|e| DomainError::database(format!("Failed to get preview_content: {}", e)))?;
    let full_content: String = row
        .try_get("full_content")
        .map_err(|e| DomainError::database(format!("Failed to get full_content: {}", e)))?;
    let price_cents: i64 = row
        .try_get("price_cents")
        .map_err(|e| DomainError::database(format!("Failed to get price_cents: {}", e)))?;
    let status_str: String = row
        .try_get("status")
        .map_err(|e| DomainError::database(format!("Failed to get status: {}", e)))?;

    let status = MetaphorStatus::parse(&status_str)
        .ok_or_else(|| DomainError::database(format!("Invalid metaphor status: {}", status_str)))?;

    Ok(Metaphor {
        id: MetaphorId::new(id)
            .map_err(|e| DomainError::database(format!("Invalid metaphor id: {}", e)))?,
        title,
        order_index,
        preview_content,
        full_content,
        price_cents,
        status,
    })
}

fn row_to_bundle(row: sqlx::postgres::PgRow) -> Result<Bundle, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;
    let price_cents: i64 = row
        .try_get("price_cents")
        .map_err(|e| DomainError::database(format!("Failed to get price_cents: {}", e)))?;
    let slugs: Vec<String> = row
        .try_get("metaphor_ids")
        .map_err(|e| DomainError::database(format!("Failed to get metaphor_ids: {}", e)))?;
    let active: bool = row
        .try_get("active")
        .map_err(|e| DomainError::database(format!("Failed to get active: {}", e)))?;

    let metaphor_ids = slugs
        .into_iter()
        .map(|slug| {
            MetaphorId::new(slug)
                .map_err(|e| DomainError::database(format!("Invalid metaphor id: {}", e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Bundle {
        id: BundleId::new(id)
            .map_err(|e| DomainError::database(format!("Invalid bundle id: {}", e)))?,
        name,
        price_cents,
        metaphor_ids,
        active,
    })
}
