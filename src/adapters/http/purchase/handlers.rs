//! HTTP handlers for the purchase endpoints.

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{BundleGrantResponse, PurchaseListResponse, PurchaseResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::purchase::{
    ListPurchasesQuery, PurchaseBundleCommand, PurchaseMetaphorCommand,
};
use crate::domain::foundation::{BundleId, DomainError, MetaphorId};

/// `POST /api/purchase/:id`
pub async fn purchase_metaphor(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    let metaphor_id = MetaphorId::new(id)
        .map_err(|e| ApiError::Domain(DomainError::from(e)))?;

    let purchase = state
        .purchase_handler()
        .handle(PurchaseMetaphorCommand {
            user_id: user.id,
            metaphor_id,
        })
        .await?;

    Ok(Json(PurchaseResponse::from(&purchase)))
}

/// `POST /api/purchase/bundle/:id`
pub async fn purchase_bundle(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<BundleGrantResponse>, ApiError> {
    let bundle_id = BundleId::new(id)
        .map_err(|e| ApiError::Domain(DomainError::from(e)))?;

    let grant = state
        .bundle_handler()
        .handle(PurchaseBundleCommand {
            user_id: user.id,
            bundle_id,
        })
        .await?;

    Ok(Json(BundleGrantResponse::from(&grant)))
}

/// `GET /api/user/purchases`
pub async fn list_purchases(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<PurchaseListResponse>, ApiError> {
    let owned = state
        .list_purchases_handler()
        .handle(ListPurchasesQuery { user_id: user.id })
        .await?;

    Ok(Json(PurchaseListResponse {
        purchases: owned.iter().map(|id| id.to_string()).collect(),
    }))
}
