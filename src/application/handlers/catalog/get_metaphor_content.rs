//! GetMetaphorContentHandler - entitlement-gated content reads.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MetaphorId, UserId};
use crate::ports::{CatalogReader, PurchaseRepository};

/// Query for a metaphor's content on behalf of a signed-in user.
#[derive(Debug, Clone)]
pub struct GetMetaphorContentQuery {
    pub user_id: UserId,
    pub metaphor_id: MetaphorId,
}

/// The content actually served: full text for owners, preview otherwise.
#[derive(Debug, Clone)]
pub struct ContentView {
    pub metaphor_id: MetaphorId,
    pub title: String,
    pub content: String,
    pub has_access: bool,
}

/// Handler backing `GET /api/metaphors/{id}/content`.
///
/// Existence is checked before entitlement, so an unknown slug is a 404
/// regardless of what the caller owns.
pub struct GetMetaphorContentHandler {
    catalog: Arc<dyn CatalogReader>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl GetMetaphorContentHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>, purchases: Arc<dyn PurchaseRepository>) -> Self {
        Self { catalog, purchases }
    }

    pub async fn handle(
        &self,
        query: GetMetaphorContentQuery,
    ) -> Result<ContentView, DomainError> {
        let metaphor = self
            .catalog
            .find_metaphor(&query.metaphor_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::MetaphorNotFound, "Metaphor not found"))?;

        let has_access = self
            .purchases
            .exists(&query.user_id, &query.metaphor_id)
            .await?;

        let content = if has_access {
            metaphor.full_content
        } else {
            metaphor.preview_content
        };

        Ok(ContentView {
            metaphor_id: metaphor.id,
            title: metaphor.title,
            content,
            has_access,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::catalog::{Metaphor, MetaphorStatus};
    use crate::domain::purchase::Purchase;
    use crate::domain::user::{User, VerifiedIdentity};

    fn seeded() -> (Arc<InMemoryStore>, User) {
        let store = Arc::new(InMemoryStore::new());
        store.seed_metaphor(Metaphor {
            id: MetaphorId::new("poker").unwrap(),
            title: "Poker".to_string(),
            order_index: 1,
            preview_content: "the opening hand".to_string(),
            full_content: "the whole table".to_string(),
            price_cents: 500,
            status: MetaphorStatus::Available,
        });
        let user = User::from_identity(
            &VerifiedIdentity::new("sub-1", "alice@example.com", None, None).unwrap(),
        );
        store.seed_user(user.clone());
        (store, user)
    }

    fn handler(store: &Arc<InMemoryStore>) -> GetMetaphorContentHandler {
        GetMetaphorContentHandler::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn unpurchased_metaphor_serves_the_preview() {
        let (store, user) = seeded();
        let view = handler(&store)
            .handle(GetMetaphorContentQuery {
                user_id: user.id,
                metaphor_id: MetaphorId::new("poker").unwrap(),
            })
            .await
            .unwrap();
        assert!(!view.has_access);
        assert_eq!(view.content, "the opening hand");
    }

    #[tokio::test]
    async fn purchased_metaphor_serves_the_full_text() {
        let (store, user) = seeded();
        store
            .insert(&Purchase::grant(
                &user,
                MetaphorId::new("poker").unwrap(),
                500,
            ))
            .await
            .unwrap();

        let view = handler(&store)
            .handle(GetMetaphorContentQuery {
                user_id: user.id,
                metaphor_id: MetaphorId::new("poker").unwrap(),
            })
            .await
            .unwrap();
        assert!(view.has_access);
        assert_eq!(view.content, "the whole table");
    }

    #[tokio::test]
    async fn unknown_slug_is_404_even_for_heavy_buyers() {
        let (store, user) = seeded();
        store
            .insert(&Purchase::grant(
                &user,
                MetaphorId::new("poker").unwrap(),
                500,
            ))
            .await
            .unwrap();

        let err = handler(&store)
            .handle(GetMetaphorContentQuery {
                user_id: user.id,
                metaphor_id: MetaphorId::new("missing").unwrap(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MetaphorNotFound);
    }
}
