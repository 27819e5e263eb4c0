//! HTTP handlers for the catalog endpoints.

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{ContentResponse, MetaphorResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::catalog::{GetMetaphorContentQuery, GetMetaphorQuery};
use crate::domain::foundation::{DomainError, MetaphorId};

/// `GET /api/metaphors`
pub async fn list_metaphors(
    State(state): State<AppState>,
) -> Result<Json<Vec<MetaphorResponse>>, ApiError> {
    let metaphors = state.list_metaphors_handler().handle().await?;
    Ok(Json(metaphors.iter().map(MetaphorResponse::from).collect()))
}

/// `GET /api/metaphors/:id`
pub async fn get_metaphor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MetaphorResponse>, ApiError> {
    let metaphor = state
        .get_metaphor_handler()
        .handle(GetMetaphorQuery {
            metaphor_id: parse_metaphor_id(id)?,
        })
        .await?;

    Ok(Json(MetaphorResponse::from(&metaphor)))
}

/// `GET /api/metaphors/:id/content`
pub async fn get_metaphor_content(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<ContentResponse>, ApiError> {
    let view = state
        .content_handler()
        .handle(GetMetaphorContentQuery {
            user_id: user.id,
            metaphor_id: parse_metaphor_id(id)?,
        })
        .await?;

    Ok(Json(ContentResponse::from(&view)))
}

fn parse_metaphor_id(id: String) -> Result<MetaphorId, ApiError> {
    MetaphorId::new(id)
        .map_err(|e| ApiError::Domain(DomainError::from(e)))
}
