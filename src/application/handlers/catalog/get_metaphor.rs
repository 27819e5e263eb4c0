//! GetMetaphorHandler - single catalog entry lookup.

use std::sync::Arc;

use crate::domain::catalog::Metaphor;
use crate::domain::foundation::{DomainError, ErrorCode, MetaphorId};
use crate::ports::CatalogReader;

/// Query for one catalog entry by its slug.
#[derive(Debug, Clone)]
pub struct GetMetaphorQuery {
    pub metaphor_id: MetaphorId,
}

/// Handler backing `GET /api/metaphors/{id}`.
pub struct GetMetaphorHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl GetMetaphorHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetMetaphorQuery) -> Result<Metaphor, DomainError> {
        self.catalog
            .find_metaphor(&query.metaphor_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::MetaphorNotFound, "Metaphor not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::catalog::MetaphorStatus;

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let err = GetMetaphorHandler::new(store)
            .handle(GetMetaphorQuery {
                metaphor_id: MetaphorId::new("missing").unwrap(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MetaphorNotFound);
    }

    #[tokio::test]
    async fn known_slug_resolves() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_metaphor(Metaphor {
            id: MetaphorId::new("poker").unwrap(),
            title: "Poker".to_string(),
            order_index: 1,
            preview_content: "preview".to_string(),
            full_content: "full".to_string(),
            price_cents: 500,
            status: MetaphorStatus::Available,
        });

        let found = GetMetaphorHandler::new(store)
            .handle(GetMetaphorQuery {
                metaphor_id: MetaphorId::new("poker").unwrap(),
            })
            .await
            .unwrap();
        assert_eq!(found.title, "Poker");
    }
}
