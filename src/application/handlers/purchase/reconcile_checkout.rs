//! ReconcileCheckoutHandler - turns verified Stripe events into entitlements.

use std::str::FromStr;
use std::sync::Arc;

use crate::domain::foundation::{MetaphorId, UserId};
use crate::domain::payment::StripeEvent;
use crate::domain::purchase::Purchase;
use crate::ports::{CatalogReader, PurchaseRepository, UserRepository};

/// What reconciliation did with the event. The webhook endpoint
/// acknowledges every authentic event the same way; this is for logs and
/// tests only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Entitlement row written.
    Granted,
    /// The (user, metaphor) pair already existed; nothing to do.
    AlreadyOwned,
    /// Event type we don't act on.
    Ignored,
    /// Checkout event we could not reconcile; reason logged.
    Dropped,
}

/// Handler for authenticated `checkout.session.completed` events.
///
/// Runs strictly after signature verification. Never fails: the webhook
/// contract is to acknowledge authentic events unconditionally, so every
/// reconciliation problem is logged and swallowed. The entitlement
/// reference arrives as the structured metadata fields `user_id` and
/// `metaphor_id` set when the checkout session was created.
pub struct ReconcileCheckoutHandler {
    users: Arc<dyn UserRepository>,
    catalog: Arc<dyn CatalogReader>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl ReconcileCheckoutHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        catalog: Arc<dyn CatalogReader>,
        purchases: Arc<dyn PurchaseRepository>,
    ) -> Self {
        Self {
            users,
            catalog,
            purchases,
        }
    }

    pub async fn handle(&self, event: StripeEvent) -> ReconcileOutcome {
        if !event.is_checkout_completed() {
            tracing::debug!(event_type = %event.event_type, "ignoring event type");
            return ReconcileOutcome::Ignored;
        }

        let session = match event.checkout_session() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(event_id = %event.id, error = %e, "malformed checkout object");
                return ReconcileOutcome::Dropped;
            }
        };

        let (user_id, metaphor_id) = match (
            session.metadata.user_id.as_deref(),
            session.metadata.metaphor_id.as_deref(),
        ) {
            (Some(user_id), Some(metaphor_id)) => (user_id, metaphor_id),
            _ => {
                tracing::warn!(
                    checkout_id = %session.id,
                    "checkout session missing entitlement metadata"
                );
                return ReconcileOutcome::Dropped;
            }
        };

        let user_id = match UserId::from_str(user_id) {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!(checkout_id = %session.id, "metadata user_id is not a uuid");
                return ReconcileOutcome::Dropped;
            }
        };
        let metaphor_id = match MetaphorId::new(metaphor_id) {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!(checkout_id = %session.id, "metadata metaphor_id is empty");
                return ReconcileOutcome::Dropped;
            }
        };

        let user = match self.users.find_by_id(&user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(
                    checkout_id = %session.id,
                    user_id = %user_id,
                    "checkout for unknown user; dropping"
                );
                return ReconcileOutcome::Dropped;
            }
            Err(e) => {
                tracing::error!(checkout_id = %session.id, error = %e, "user lookup failed");
                return ReconcileOutcome::Dropped;
            }
        };

        // Amount paid comes from Stripe when present; fall back to the
        // catalog price for older checkout sessions.
        let price_cents = match session.amount_total {
            Some(amount) => amount,
            None => match self.catalog.find_metaphor(&metaphor_id).await {
                Ok(Some(metaphor)) => metaphor.price_cents,
                Ok(None) | Err(_) => 0,
            },
        };

        let purchase = Purchase::grant(&user, metaphor_id, price_cents);
        match self.purchases.insert(&purchase).await {
            Ok(()) => {
                tracing::info!(
                    checkout_id = %session.id,
                    user_id = %purchase.user_id,
                    metaphor_id = purchase.metaphor_id.as_str(),
                    "entitlement granted from checkout"
                );
                ReconcileOutcome::Granted
            }
            // Webhook retries and site-side purchases both land here;
            // the event is idempotent by the unique pair constraint.
            Err(e) if e.is_duplicate() => {
                tracing::info!(checkout_id = %session.id, "entitlement already present");
                ReconcileOutcome::AlreadyOwned
            }
            Err(e) => {
                tracing::error!(checkout_id = %session.id, error = %e, "entitlement insert failed");
                ReconcileOutcome::Dropped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::user::{User, VerifiedIdentity};
    use serde_json::json;

    fn seeded() -> (Arc<InMemoryStore>, User) {
        let store = Arc::new(InMemoryStore::new());
        let user = User::from_identity(
            &VerifiedIdentity::new("sub-1", "alice@example.com", None, None).unwrap(),
        );
        store.seed_user(user.clone());
        (store, user)
    }

    fn handler(store: &Arc<InMemoryStore>) -> ReconcileCheckoutHandler {
        ReconcileCheckoutHandler::new(store.clone(), store.clone(), store.clone())
    }

    fn checkout_event(user_id: &str, metaphor_id: &str) -> StripeEvent {
        serde_json::from_value(json!({
            "id": "evt_1",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": {
                "object": {
                    "id": "cs_1",
                    "amount_total": 500,
                    "metadata": { "user_id": user_id, "metaphor_id": metaphor_id }
                }
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn valid_checkout_grants_exactly_one_entitlement() {
        let (store, user) = seeded();
        let event = checkout_event(&user.id.to_string(), "poker");

        let outcome = handler(&store).handle(event).await;
        assert_eq!(outcome, ReconcileOutcome::Granted);
        assert_eq!(
            store.purchase_count(&user.id, &MetaphorId::new("poker").unwrap()),
            1
        );
    }

    #[tokio::test]
    async fn redelivered_event_is_idempotent() {
        let (store, user) = seeded();
        let h = handler(&store);
        let event = checkout_event(&user.id.to_string(), "poker");

        assert_eq!(h.handle(event.clone()).await, ReconcileOutcome::Granted);
        assert_eq!(h.handle(event).await, ReconcileOutcome::AlreadyOwned);
        assert_eq!(
            store.purchase_count(&user.id, &MetaphorId::new("poker").unwrap()),
            1
        );
    }

    #[tokio::test]
    async fn unknown_user_is_dropped_without_a_row() {
        let (store, _) = seeded();
        let event = checkout_event(&UserId::new().to_string(), "poker");

        let outcome = handler(&store).handle(event).await;
        assert_eq!(outcome, ReconcileOutcome::Dropped);
    }

    #[tokio::test]
    async fn non_checkout_events_are_ignored() {
        let (store, _) = seeded();
        let event: StripeEvent = serde_json::from_value(json!({
            "id": "evt_2",
            "type": "invoice.paid",
            "created": 1704067200,
            "data": { "object": {} }
        }))
        .unwrap();

        assert_eq!(handler(&store).handle(event).await, ReconcileOutcome::Ignored);
    }

    #[tokio::test]
    async fn missing_metadata_is_dropped() {
        let (store, _) = seeded();
        let event: StripeEvent = serde_json::from_value(json!({
            "id": "evt_3",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": { "object": { "id": "cs_3" } }
        }))
        .unwrap();

        assert_eq!(handler(&store).handle(event).await, ReconcileOutcome::Dropped);
    }
}
