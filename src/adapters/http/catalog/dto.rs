//! Wire types for the catalog endpoints.
//!
//! Listing and lookup responses carry the preview only; full content is
//! served solely by the entitlement-gated content endpoint.

use serde::Serialize;

use crate::application::handlers::catalog::ContentView;
use crate::domain::catalog::Metaphor;

/// Catalog entry as shown publicly.
#[derive(Debug, Serialize)]
pub struct MetaphorResponse {
    pub id: String,
    pub title: String,
    pub order_index: i32,
    pub preview_content: String,
    pub price_cents: i64,
    pub status: String,
}

impl From<&Metaphor> for MetaphorResponse {
    fn from(metaphor: &Metaphor) -> Self {
        Self {
            id: metaphor.id.to_string(),
            title: metaphor.title.clone(),
            order_index: metaphor.order_index,
            preview_content: metaphor.preview_content.clone(),
            price_cents: metaphor.price_cents,
            status: metaphor.status.as_str().to_string(),
        }
    }
}

/// Response of the gated content endpoint.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub has_access: bool,
}

impl From<&ContentView> for ContentResponse {
    fn from(view: &ContentView) -> Self {
        Self {
            id: view.metaphor_id.to_string(),
            title: view.title.clone(),
            content: view.content.clone(),
            has_access: view.has_access,
        }
    }
}
