//! ListPurchasesHandler - the signed-in user's entitlements.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, MetaphorId, UserId};
use crate::ports::PurchaseRepository;

/// Query for everything a user owns.
#[derive(Debug, Clone)]
pub struct ListPurchasesQuery {
    pub user_id: UserId,
}

/// Handler backing `GET /api/user/purchases`.
pub struct ListPurchasesHandler {
    purchases: Arc<dyn PurchaseRepository>,
}

impl ListPurchasesHandler {
    pub fn new(purchases: Arc<dyn PurchaseRepository>) -> Self {
        Self { purchases }
    }

    pub async fn handle(&self, query: ListPurchasesQuery) -> Result<Vec<MetaphorId>, DomainError> {
        self.purchases.list_metaphor_ids(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::purchase::Purchase;
    use crate::domain::user::{User, VerifiedIdentity};

    #[tokio::test]
    async fn lists_only_the_callers_entitlements() {
        let store = Arc::new(InMemoryStore::new());
        let alice = User::from_identity(
            &VerifiedIdentity::new("sub-1", "alice@example.com", None, None).unwrap(),
        );
        let bob = User::from_identity(
            &VerifiedIdentity::new("sub-2", "bob@example.com", None, None).unwrap(),
        );
        store
            .insert(&Purchase::grant(
                &alice,
                MetaphorId::new("poker").unwrap(),
                500,
            ))
            .await
            .unwrap();
        store
            .insert(&Purchase::grant(
                &bob,
                MetaphorId::new("chess").unwrap(),
                500,
            ))
            .await
            .unwrap();

        let owned = ListPurchasesHandler::new(store)
            .handle(ListPurchasesQuery { user_id: alice.id })
            .await
            .unwrap();
        assert_eq!(owned, vec![MetaphorId::new("poker").unwrap()]);
    }

    #[tokio::test]
    async fn empty_history_is_an_empty_list() {
        let store = Arc::new(InMemoryStore::new());
        let owned = ListPurchasesHandler::new(store)
            .handle(ListPurchasesQuery {
                user_id: crate::domain::foundation::UserId::new(),
            })
            .await
            .unwrap();
        assert!(owned.is_empty());
    }
}
