//! PurchaseBundleHandler - grants every not-yet-owned item of a bundle.

use std::sync::Arc;

use crate::domain::foundation::{BundleId, DomainError, ErrorCode, UserId};
use crate::domain::purchase::{BundleGrant, Purchase};
use crate::ports::{CatalogReader, PurchaseRepository, UserRepository};

/// Command to purchase a bundle for the signed-in user.
#[derive(Debug, Clone)]
pub struct PurchaseBundleCommand {
    pub user_id: UserId,
    pub bundle_id: BundleId,
}

/// Handler backing `POST /api/purchase/bundle/{id}`.
///
/// Items the user already owns are skipped, not re-inserted; the response
/// reports both sets so the caller can tell a full grant from a partial
/// one. The batch insert tolerates conflicts, so a concurrent single-item
/// purchase cannot fail the bundle.
pub struct PurchaseBundleHandler {
    catalog: Arc<dyn CatalogReader>,
    users: Arc<dyn UserRepository>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl PurchaseBundleHandler {
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

    pub async fn handle(&self, cmd: PurchaseBundleCommand) -> Result<BundleGrant, DomainError> {
        // Inactive bundles are treated as absent by the reader.
        let bundle = self
            .catalog
            .find_bundle(&cmd.bundle_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::BundleNotFound, "Bundle not found"))?;

        let owned = self
            .purchases
            .owned_subset(&cmd.user_id, &bundle.metaphor_ids)
            .await?;
        let grant = BundleGrant::split(&bundle.metaphor_ids, &owned);

        if grant.nothing_to_grant() {
            return Ok(grant);
        }

        let user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        let mut rows = Vec::with_capacity(grant.granted.len());
        for metaphor_id in &grant.granted {
            match self.catalog.find_metaphor(metaphor_id).await? {
                Some(metaphor) => {
                    rows.push(Purchase::grant(&user, metaphor.id, metaphor.price_cents))
                }
                // A bundle referencing a missing catalog row is a data
                // problem, not the purchaser's.
                None => tracing::warn!(
                    bundle_id = bundle.id.as_str(),
                    metaphor_id = metaphor_id.as_str(),
                    "bundle references unknown metaphor; skipping"
                ),
            }
        }
        self.purchases.insert_many(&rows).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            bundle_id = bundle.id.as_str(),
            granted = grant.granted.len(),
            already_owned = grant.already_owned.len(),
            "bundle purchase recorded"
        );
        Ok(grant)
    }
}
