//! Catalog entries: metaphors and bundles.
//!
//! Read-only from the service's perspective; the rows are managed
//! out-of-band.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BundleId, MetaphorId};

/// Publication state of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaphorStatus {
    Available,
    ComingSoon,
}

impl MetaphorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaphorStatus::Available => "available",
            MetaphorStatus::ComingSoon => "coming_soon",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(MetaphorStatus::Available),
            "coming_soon" => Some(MetaphorStatus::ComingSoon),
            _ => None,
        }
    }
}

/// A purchasable content item.
///
/// `order_index` defines the total display order of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metaphor {
    pub id: MetaphorId,
    pub title: String,
    pub order_index: i32,
    pub preview_content: String,
    pub full_content: String,
    /// Price in cents.
    pub price_cents: i64,
    pub status: MetaphorStatus,
}

/// A named, priced group of metaphors sold as one purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub id: BundleId,
    pub name: String,
    /// Price in cents for the whole bundle.
    pub price_cents: i64,
    pub metaphor_ids: Vec<MetaphorId>,
    /// Inactive bundles are not purchasable and are treated as absent.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips() {
        assert_eq!(
            MetaphorStatus::parse("available"),
            Some(MetaphorStatus::Available)
        );
        assert_eq!(
            MetaphorStatus::parse(MetaphorStatus::ComingSoon.as_str()),
            Some(MetaphorStatus::ComingSoon)
        );
        assert_eq!(MetaphorStatus::parse("retired"), None);
    }
}
