//! Purchase entitlements.
//!
//! A purchase grants one user access to one metaphor's full content. The
//! store enforces at most one row per (user, metaphor) pair via a unique
//! constraint; a racing duplicate insert surfaces as a typed conflict and
//! is reported as already-owned.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MetaphorId, Timestamp, UserId};
use crate::domain::user::User;

/// Durable record that a user paid for a metaphor.
///
/// Email and name are denormalized from the user profile at purchase time,
/// matching what the payment records carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub user_id: UserId,
    pub metaphor_id: MetaphorId,
    pub email: String,
    pub name: Option<String>,
    /// Price paid, in cents.
    pub price_cents: i64,
    pub purchased_at: Timestamp,
}

impl Purchase {
    /// Builds an entitlement row for `user` and `metaphor_id` at the given price.
    pub fn grant(user: &User, metaphor_id: MetaphorId, price_cents: i64) -> Self {
        Self {
            user_id: user.id,
            metaphor_id,
            email: user.email.clone(),
            name: user.name.clone(),
            price_cents,
            purchased_at: Timestamp::now(),
        }
    }
}

/// Outcome of splitting a bundle against a user's existing entitlements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleGrant {
    /// Items the user did not own yet; one Purchase row each.
    pub granted: Vec<MetaphorId>,
    /// Items already owned; reported but not re-inserted.
    pub already_owned: Vec<MetaphorId>,
}

impl BundleGrant {
    /// Splits the bundle's items into not-yet-owned and already-owned sets,
    /// preserving the bundle's item order.
    pub fn split(bundle_items: &[MetaphorId], owned: &[MetaphorId]) -> Self {
        let (already_owned, granted) = bundle_items
            .iter()
            .cloned()
            .partition(|id| owned.contains(id));
        Self {
            granted,
            already_owned,
        }
    }

    /// True when every item in the bundle was already owned.
    pub fn nothing_to_grant(&self) -> bool {
        self.granted.is_empty()
    }
}
