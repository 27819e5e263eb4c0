//! ListMetaphorsHandler - the public catalog listing.

use std::sync::Arc;

use crate::domain::catalog::Metaphor;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogReader;

/// Handler backing `GET /api/metaphors`. Rows come back in display order
/// (`order_index` ascending); full content is stripped at the DTO layer.
pub struct ListMetaphorsHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ListMetaphorsHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Metaphor>, DomainError> {
        self.catalog.list_metaphors().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::catalog::MetaphorStatus;
    use crate::domain::foundation::MetaphorId;

    fn metaphor(id: &str, order_index: i32) -> Metaphor {
        Metaphor {
            id: MetaphorId::new(id).unwrap(),
            title: id.to_string(),
            order_index,
            preview_content: "preview".to_string(),
            full_content: "full".to_string(),
            price_cents: 500,
            status: MetaphorStatus::Available,
        }
    }

    #[tokio::test]
    async fn listing_follows_display_order() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_metaphor(metaphor("chess", 2));
        store.seed_metaphor(metaphor("poker", 1));

        let listed = ListMetaphorsHandler::new(store).handle().await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["poker", "chess"]);
    }
}
