//! Purchase repository port.
//!
//! Store contract for the entitlement ledger. The `(user, metaphor)` pair
//! is unique at the store layer; `insert` surfaces a lost race as
//! `ErrorCode::DuplicateRecord` and `insert_many` skips rows that already
//! exist, so both the single and bundle paths stay correct under
//! concurrent duplicate attempts.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MetaphorId, UserId};
use crate::domain::purchase::Purchase;

/// Repository port for Purchase persistence.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Whether a purchase exists for the pair.
    async fn exists(
        &self,
        user_id: &UserId,
        metaphor_id: &MetaphorId,
    ) -> Result<bool, DomainError>;

    /// Insert one entitlement row.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` when the pair already exists
    /// - `DatabaseError` on any other persistence failure
    async fn insert(&self, purchase: &Purchase) -> Result<(), DomainError>;

    /// Insert a batch of entitlement rows, skipping pairs that already
    /// exist (conflict-tolerant bulk insert).
    async fn insert_many(&self, purchases: &[Purchase]) -> Result<(), DomainError>;

    /// Of `metaphor_ids`, return the subset the user already owns.
    async fn owned_subset(
        &self,
        user_id: &UserId,
        metaphor_ids: &[MetaphorId],
    ) -> Result<Vec<MetaphorId>, DomainError>;

    /// All metaphor ids the user owns.
    async fn list_metaphor_ids(&self, user_id: &UserId) -> Result<Vec<MetaphorId>, DomainError>;
}
