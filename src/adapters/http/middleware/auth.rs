//! Bearer-token middleware and extractors.
//!
//! `auth_middleware` resolves `Authorization: Bearer <token>` through the
//! `SessionValidator` port and injects the `AuthenticatedUser` into
//! request extensions. Handlers opt in with `RequireAuth` (401 with code
//! `AUTH_REQUIRED` when no token was presented) or `OptionalAuth`.
//!
//! A request with no token passes through the middleware untouched so
//! public routes and optional-auth routes keep working; a request with a
//! token that fails validation is rejected here, before any handler runs.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::super::error::auth_error_response;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// State for the auth middleware.
pub type AuthState = Arc<dyn SessionValidator>;

/// Validates bearer tokens and injects the authenticated user.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match validator.validate(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => {
                let (status, body) = auth_error_response(&e);
                (status, Json(body)).into_response()
            }
        },
        // No token: continue; RequireAuth rejects later if the route
        // needs one.
        None => next.run(request).await,
    }
}

/// Extractor for routes that require a signed-in user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection)
        })
    }
}

/// Extractor for routes where a signed-in user is optional.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> axum::extract::FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            Ok(OptionalAuth(
                parts.extensions.get::<AuthenticatedUser>().cloned(),
            ))
        })
    }
}

/// Rejection when a protected route is hit without credentials.
#[derive(Debug, Clone)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, body) = auth_error_response(&AuthError::MissingCredentials);
        debug_assert_eq!(status, StatusCode::UNAUTHORIZED);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    use crate::domain::foundation::UserId;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "test@example.com", None)
    }

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_user());
        let (mut parts, _) = request.into_parts();

        let RequireAuth(user) = RequireAuth::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn require_auth_rejects_without_user() {
        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = RequireAuth::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn optional_auth_is_none_when_absent() {
        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let OptionalAuth(user) = OptionalAuth::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(user.is_none());
    }

    #[test]
    fn missing_credentials_rejection_is_401() {
        let response = AuthRejection.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_prefix_extraction() {
        assert_eq!(
            "Bearer tok-1".strip_prefix("Bearer "),
            Some("tok-1")
        );
        assert_eq!("Basic dXNlcg==".strip_prefix("Bearer "), None);
    }
}
