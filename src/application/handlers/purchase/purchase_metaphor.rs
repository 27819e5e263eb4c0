//! PurchaseMetaphorHandler - grants a single-metaphor entitlement.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MetaphorId, UserId};
use crate::domain::purchase::Purchase;
use crate::ports::{CatalogReader, PurchaseRepository, UserRepository};

/// Command to record a purchase for the signed-in user.
#[derive(Debug, Clone)]
pub struct PurchaseMetaphorCommand {
    pub user_id: UserId,
    pub metaphor_id: MetaphorId,
}

/// Handler backing `POST /api/purchase/{id}`.
///
/// The ownership pre-check gives the common already-owned case a clean
/// answer; the race between two concurrent purchases is closed by the
/// store's unique (user, metaphor) constraint, whose typed conflict is
/// reported the same way.
pub struct PurchaseMetaphorHandler {
    catalog: Arc<dyn CatalogReader>,
    users: Arc<dyn UserRepository>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl PurchaseMetaphorHandler {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        users: Arc<dyn UserRepository>,
        purchases: Arc<dyn PurchaseRepository>,
    ) -> Self {
        Self {
            catalog,
            users,
            purchases,
        }
    }

    pub async fn handle(&self, cmd: PurchaseMetaphorCommand) -> Result<Purchase, DomainError> {
        let metaphor = self
            .catalog
            .find_metaphor(&cmd.metaphor_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::MetaphorNotFound, "Metaphor not found"))?;

        if self.purchases.exists(&cmd.user_id, &cmd.metaphor_id).await? {
            return Err(already_owned());
        }

        let user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        let purchase = Purchase::grant(&user, metaphor.id, metaphor.price_cents);
        match self.purchases.insert(&purchase).await {
            Ok(()) => {
                tracing::info!(
                    user_id = %purchase.user_id,
                    metaphor_id = %purchase.metaphor_id.as_str(),
                    "purchase recorded"
                );
                Ok(purchase)
            }
            // A concurrent purchase won the insert between the check and
            // here. Same outcome for the caller.
            Err(e) if e.is_duplicate() => Err(already_owned()),
            Err(e) => Err(e),
        }
    }
}

fn already_owned() -> DomainError {
    DomainError::new(ErrorCode::AlreadyOwned, "Metaphor already purchased")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::catalog::{Metaphor, MetaphorStatus};
    use crate::domain::user::{User, VerifiedIdentity};

    fn seeded() -> (Arc<InMemoryStore>, User) {
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
        let user = User::from_identity(
            &VerifiedIdentity::new("sub-1", "alice@example.com", Some("Alice".into()), None)
                .unwrap(),
        );
        store.seed_user(user.clone());
        (store, user)
    }

    fn handler(store: &Arc<InMemoryStore>) -> PurchaseMetaphorHandler {
        PurchaseMetaphorHandler::new(store.clone(), store.clone(), store.clone())
    }

    fn cmd(user: &User) -> PurchaseMetaphorCommand {
        PurchaseMetaphorCommand {
            user_id: user.id,
            metaphor_id: MetaphorId::new("poker").unwrap(),
        }
    }

    #[tokio::test]
    async fn purchase_records_denormalized_profile_and_price() {
        let (store, user) = seeded();
        let purchase = handler(&store).handle(cmd(&user)).await.unwrap();
        assert_eq!(purchase.email, "alice@example.com");
        assert_eq!(purchase.name.as_deref(), Some("Alice"));
        assert_eq!(purchase.price_cents, 500);
    }

    #[tokio::test]
    async fn second_purchase_conflicts_and_keeps_one_row() {
        let (store, user) = seeded();
        let h = handler(&store);

        h.handle(cmd(&user)).await.unwrap();
        let err = h.handle(cmd(&user)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AlreadyOwned);
        assert_eq!(
            store.purchase_count(&user.id, &MetaphorId::new("poker").unwrap()),
            1
        );
    }

    #[tokio::test]
    async fn unknown_metaphor_is_not_found() {
        let (store, user) = seeded();
        let err = handler(&store)
            .handle(PurchaseMetaphorCommand {
                user_id: user.id,
                metaphor_id: MetaphorId::new("missing").unwrap(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MetaphorNotFound);
    }

    #[tokio::test]
    async fn losing_the_insert_race_reads_as_already_owned() {
        let (store, user) = seeded();
        // Simulate the racing winner landing after this handler's
        // existence check would have passed.
        store
            .insert(&Purchase::grant(
                &user,
                MetaphorId::new("poker").unwrap(),
                500,
            ))
            .await
            .unwrap();

        let err = handler(&store).handle(cmd(&user)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyOwned);
    }
}
