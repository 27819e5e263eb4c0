//! Catalog reader port (read side).
//!
//! Metaphors and bundles are managed out-of-band; the service only reads
//! them.

use async_trait::async_trait;

use crate::domain::catalog::{Bundle, Metaphor};
use crate::domain::foundation::{BundleId, DomainError, MetaphorId};

/// Read-only port over the catalog tables.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// All metaphors in display order (`order_index` ascending).
    async fn list_metaphors(&self) -> Result<Vec<Metaphor>, DomainError>;

    /// Find one metaphor by id.
    async fn find_metaphor(&self, id: &MetaphorId) -> Result<Option<Metaphor>, DomainError>;

    /// Find one active bundle by id. Inactive bundles are reported as
    /// absent.
    async fn find_bundle(&self, id: &BundleId) -> Result<Option<Bundle>, DomainError>;
}
