//! HTTP adapter: REST API over the application handlers.
//!
//! Endpoint areas, each with its own dto/handlers/routes modules:
//! - `/api/auth` - Google Sign-In, profile, logout
//! - `/api/metaphors` - catalog listing and gated content
//! - `/api/purchase`, `/api/user` - entitlement grants and listing
//! - `/api/subscribe`, `/api/metaphor-suggestions`, `/api/feedback` - inboxes
//! - `/api/interview` - token-gated interview invites
//! - `/api/stripe` - signature-gated webhook

pub mod auth;
pub mod catalog;
pub mod error;
pub mod inbox;
pub mod interview;
pub mod middleware;
pub mod purchase;
pub mod webhook;

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::auth::{
    GetProfileHandler, LoginWithGoogleHandler, LogoutHandler,
};
use crate::application::handlers::catalog::{
    GetMetaphorContentHandler, GetMetaphorHandler, ListMetaphorsHandler,
};
use crate::application::handlers::inbox::{
    SubmitFeedbackHandler, SubmitSuggestionHandler, SubscribeHandler,
};
use crate::application::handlers::interview::{
    StartInterviewHandler, SubmitInterviewHandler, ValidateInviteHandler,
};
use crate::application::handlers::purchase::{
    ListPurchasesHandler, PurchaseBundleHandler, PurchaseMetaphorHandler,
    ReconcileCheckoutHandler,
};
use crate::application::StoreSessionValidator;
use crate::domain::payment::StripeWebhookVerifier;
use crate::ports::{
    CatalogReader, IdentityVerifier, InboxWriter, InviteRepository, PurchaseRepository,
    SessionRepository, UserRepository,
};

use middleware::{auth_middleware, AuthState};

/// Shared state for all HTTP handlers.
///
/// Holds the ports; request handlers are constructed on demand so each
/// request works with plain `Arc` clones.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub purchases: Arc<dyn PurchaseRepository>,
    pub catalog: Arc<dyn CatalogReader>,
    pub inbox: Arc<dyn InboxWriter>,
    pub invites: Arc<dyn InviteRepository>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub webhook_verifier: Arc<StripeWebhookVerifier>,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn login_handler(&self) -> LoginWithGoogleHandler {
        LoginWithGoogleHandler::new(
            self.identity.clone(),
            self.users.clone(),
            self.sessions.clone(),
        )
    }

    pub fn profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.users.clone())
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.sessions.clone())
    }

    pub fn list_metaphors_handler(&self) -> ListMetaphorsHandler {
        ListMetaphorsHandler::new(self.catalog.clone())
    }

    pub fn get_metaphor_handler(&self) -> GetMetaphorHandler {
        GetMetaphorHandler::new(self.catalog.clone())
    }

    pub fn content_handler(&self) -> GetMetaphorContentHandler {
        GetMetaphorContentHandler::new(self.catalog.clone(), self.purchases.clone())
    }

    pub fn purchase_handler(&self) -> PurchaseMetaphorHandler {
        PurchaseMetaphorHandler::new(
            self.catalog.clone(),
            self.users.clone(),
            self.purchases.clone(),
        )
    }

    pub fn bundle_handler(&self) -> PurchaseBundleHandler {
        PurchaseBundleHandler::new(
            self.catalog.clone(),
            self.users.clone(),
            self.purchases.clone(),
        )
    }

    pub fn list_purchases_handler(&self) -> ListPurchasesHandler {
        ListPurchasesHandler::new(self.purchases.clone())
    }

    pub fn reconcile_handler(&self) -> ReconcileCheckoutHandler {
        ReconcileCheckoutHandler::new(
            self.users.clone(),
            self.catalog.clone(),
            self.purchases.clone(),
        )
    }

    pub fn subscribe_handler(&self) -> SubscribeHandler {
        SubscribeHandler::new(self.inbox.clone())
    }

    pub fn suggestion_handler(&self) -> SubmitSuggestionHandler {
        SubmitSuggestionHandler::new(self.inbox.clone())
    }

    pub fn feedback_handler(&self) -> SubmitFeedbackHandler {
        SubmitFeedbackHandler::new(self.inbox.clone())
    }

    pub fn validate_invite_handler(&self) -> ValidateInviteHandler {
        ValidateInviteHandler::new(self.invites.clone())
    }

    pub fn start_interview_handler(&self) -> StartInterviewHandler {
        StartInterviewHandler::new(self.invites.clone())
    }

    pub fn submit_interview_handler(&self) -> SubmitInterviewHandler {
        SubmitInterviewHandler::new(self.invites.clone())
    }

    fn session_validator(&self) -> AuthState {
        Arc::new(StoreSessionValidator::new(
            self.sessions.clone(),
            self.users.clone(),
        ))
    }
}

/// `GET /health`
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Assembles the full application router.
///
/// Bearer tokens are resolved once in the auth middleware; route handlers
/// see the result through the `RequireAuth`/`OptionalAuth` extractors. The
/// webhook route sits behind the same middleware but carries no bearer
/// token, so it passes through untouched.
pub fn app_router(state: AppState, cors: CorsLayer) -> Router {
    let auth_state = state.session_validator();

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth::auth_routes())
        .nest("/api/metaphors", catalog::catalog_routes())
        .nest("/api/purchase", purchase::purchase_routes())
        .nest("/api/user", purchase::user_routes())
        .nest("/api/interview", interview::interview_routes())
        .nest("/api/stripe", webhook::webhook_routes())
        .nest("/api", inbox::inbox_routes())
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer from the configured allowed origins.
///
/// With no configured origins (development) every origin is allowed;
/// configured origins are matched exactly.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}
