//! Wire types for the purchase endpoints.

use serde::Serialize;

use crate::domain::purchase::{BundleGrant, Purchase};

/// Response to a successful single purchase.
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub metaphor_id: String,
    pub price_cents: i64,
    pub purchased_at: String,
}

impl From<&Purchase> for PurchaseResponse {
    fn from(purchase: &Purchase) -> Self {
        Self {
            metaphor_id: purchase.metaphor_id.to_string(),
            price_cents: purchase.price_cents,
            purchased_at: purchase.purchased_at.to_rfc3339(),
        }
    }
}

/// Response to a bundle purchase: both sets reported.
#[derive(Debug, Serialize)]
pub struct BundleGrantResponse {
    pub granted: Vec<String>,
    pub already_owned: Vec<String>,
}

impl From<&BundleGrant> for BundleGrantResponse {
    fn from(grant: &BundleGrant) -> Self {
        Self {
            granted: grant.granted.iter().map(|id| id.to_string()).collect(),
            already_owned: grant
                .already_owned
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}

/// Response listing everything the caller owns.
#[derive(Debug, Serialize)]
pub struct PurchaseListResponse {
    pub purchases: Vec<String>,
}
