//! HTTP handlers for the auth endpoints.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use super::dto::{GoogleLoginRequest, LoginResponse, LogoutResponse, UserResponse};
use crate::adapters::http::error::{ApiError, ApiJson};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;
use crate::application::handlers::auth::{
    GetProfileQuery, LoginWithGoogleCommand, LogoutCommand,
};

/// `POST /api/auth/google`
pub async fn login_with_google(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<GoogleLoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state
        .login_handler()
        .handle(LoginWithGoogleCommand {
            id_token: body.id_token,
        })
        .await?;

    Ok(Json(LoginResponse::from(&result)))
}

/// `GET /api/auth/me`
pub async fn get_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<UserResponse>, ApiError> {
    let profile = state
        .profile_handler()
        .handle(GetProfileQuery { user_id: user.id })
        .await?;

    Ok(Json(UserResponse::from(&profile)))
}

/// `POST /api/auth/logout`
///
/// Requires a valid session (the middleware already checked it) and
/// revokes exactly the presented token.
pub async fn logout(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string();

    state.logout_handler().handle(LogoutCommand { token }).await?;
    Ok(Json(LogoutResponse { success: true }))
}
