//! Integration tests for the sign-in and entitlement flow.
//!
//! Wires the application handlers to the in-memory store and the mock
//! identity verifier and walks the paths a browser session takes:
//! login, purchase, content gating, bundle grants, webhook
//! reconciliation, and the interview invite lifecycle.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use psyche_backend::adapters::google::MockIdentityVerifier;
use psyche_backend::adapters::memory::InMemoryStore;
use psyche_backend::application::handlers::auth::{
    LoginWithGoogleCommand, LoginWithGoogleHandler, LogoutCommand, LogoutHandler,
};
use psyche_backend::application::handlers::catalog::{
    GetMetaphorContentHandler, GetMetaphorContentQuery,
};
use psyche_backend::application::handlers::inbox::{SubscribeCommand, SubscribeHandler};
use psyche_backend::application::handlers::interview::{
    StartInterviewCommand, StartInterviewHandler, SubmitInterviewCommand,
    SubmitInterviewHandler, ValidateInviteHandler, ValidateInviteQuery,
};
use psyche_backend::application::handlers::purchase::{
    PurchaseBundleCommand, PurchaseBundleHandler, PurchaseMetaphorCommand,
    PurchaseMetaphorHandler, ReconcileCheckoutHandler, ReconcileOutcome,
};
use psyche_backend::application::StoreSessionValidator;
use psyche_backend::domain::catalog::{Bundle, Metaphor, MetaphorStatus};
use psyche_backend::domain::foundation::{
    AuthError, BundleId, ErrorCode, InviteToken, MetaphorId, Timestamp,
};
use psyche_backend::domain::interview::{InterviewInvite, InviteStatus};
use psyche_backend::domain::payment::{
    compute_test_signature, StripeEvent, StripeWebhookVerifier,
};
use psyche_backend::domain::user::VerifiedIdentity;
use psyche_backend::ports::SessionValidator;

fn metaphor(id: &str, order: i32, price: i64) -> Metaphor {
    Metaphor {
        id: MetaphorId::new(id).unwrap(),
        title: format!("The {} metaphor", id),
        order_index: order,
        preview_content: format!("{} preview", id),
        full_content: format!("{} full text", id),
        price_cents: price,
        status: MetaphorStatus::Available,
    }
}

fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.seed_metaphor(metaphor("poker", 1, 500));
    store.seed_metaphor(metaphor("chess", 2, 500));
    store.seed_metaphor(metaphor("garden", 3, 700));
    store.seed_bundle(Bundle {
        id: BundleId::new("starter").unwrap(),
        name: "Starter bundle".to_string(),
        price_cents: 1200,
        metaphor_ids: vec![
            MetaphorId::new("poker").unwrap(),
            MetaphorId::new("chess").unwrap(),
            MetaphorId::new("garden").unwrap(),
        ],
        active: true,
    });
    store
}

fn verifier_for(token: &str, email: &str, sub: &str) -> Arc<MockIdentityVerifier> {
    let identity =
        VerifiedIdentity::new(sub, email, Some("Alice".to_string()), None).unwrap();
    Arc::new(MockIdentityVerifier::new().with_identity(token, identity))
}

fn login_handler(
    store: &Arc<InMemoryStore>,
    verifier: Arc<MockIdentityVerifier>,
) -> LoginWithGoogleHandler {
    LoginWithGoogleHandler::new(verifier, store.clone(), store.clone())
}

#[tokio::test]
async fn login_purchase_and_read_full_content() {
    let store = seeded_store();
    let verifier = verifier_for("id-token", "alice@example.com", "sub-1");

    let login = login_handler(&store, verifier)
        .handle(LoginWithGoogleCommand {
            id_token: "id-token".to_string(),
        })
        .await
        .unwrap();

    // A bearer session was issued for the new user.
    let validator = StoreSessionValidator::new(store.clone(), store.clone());
    let auth = validator
        .validate(login.session.token.as_str())
        .await
        .unwrap();
    assert_eq!(auth.id, login.user.id);

    // Before purchase the content endpoint serves the preview only.
    let content = GetMetaphorContentHandler::new(store.clone(), store.clone());
    let view = content
        .handle(GetMetaphorContentQuery {
            user_id: login.user.id,
            metaphor_id: MetaphorId::new("poker").unwrap(),
        })
        .await
        .unwrap();
    assert!(!view.has_access);
    assert_eq!(view.content, "poker preview");

    let purchases =
        PurchaseMetaphorHandler::new(store.clone(), store.clone(), store.clone());
    purchases
        .handle(PurchaseMetaphorCommand {
            user_id: login.user.id,
            metaphor_id: MetaphorId::new("poker").unwrap(),
        })
        .await
        .unwrap();

    let view = content
        .handle(GetMetaphorContentQuery {
            user_id: login.user.id,
            metaphor_id: MetaphorId::new("poker").unwrap(),
        })
        .await
        .unwrap();
    assert!(view.has_access);
    assert_eq!(view.content, "poker full text");
}

#[tokio::test]
async fn second_login_reuses_the_account() {
    let store = seeded_store();
    let verifier = verifier_for("id-token", "alice@example.com", "sub-1");
    let handler = login_handler(&store, verifier);

    let first = handler
        .handle(LoginWithGoogleCommand {
            id_token: "id-token".to_string(),
        })
        .await
        .unwrap();
    let second = handler
        .handle(LoginWithGoogleCommand {
            id_token: "id-token".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(first.user.id, second.user.id);
    assert_ne!(first.session.token, second.session.token);
    assert_eq!(store.user_count(), 1);
    assert_eq!(store.session_count(), 2);
}

#[tokio::test]
async fn logout_revokes_the_session_and_is_idempotent() {
    let store = seeded_store();
    let verifier = verifier_for("id-token", "alice@example.com", "sub-1");
    let login = login_handler(&store, verifier)
        .handle(LoginWithGoogleCommand {
            id_token: "id-token".to_string(),
        })
        .await
        .unwrap();

    let token = login.session.token.as_str().to_string();
    let logout = LogoutHandler::new(store.clone());
    logout
        .handle(LogoutCommand {
            token: token.clone(),
        })
        .await
        .unwrap();

    let validator = StoreSessionValidator::new(store.clone(), store.clone());
    let result = validator.validate(&token).await;
    assert!(matches!(result, Err(AuthError::InvalidToken)));

    // Logging out the same token again is a no-op, not an error.
    logout.handle(LogoutCommand { token }).await.unwrap();
}

#[tokio::test]
async fn duplicate_purchase_reports_already_owned() {
    let store = seeded_store();
    let verifier = verifier_for("id-token", "alice@example.com", "sub-1");
    let login = login_handler(&store, verifier)
        .handle(LoginWithGoogleCommand {
            id_token: "id-token".to_string(),
        })
        .await
        .unwrap();

    let purchases =
        PurchaseMetaphorHandler::new(store.clone(), store.clone(), store.clone());
    let cmd = PurchaseMetaphorCommand {
        user_id: login.user.id,
        metaphor_id: MetaphorId::new("poker").unwrap(),
    };
    purchases.handle(cmd.clone()).await.unwrap();

    let err = purchases.handle(cmd).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AlreadyOwned);
    assert_eq!(
        store.purchase_count(&login.user.id, &MetaphorId::new("poker").unwrap()),
        1
    );
}

#[tokio::test]
async fn bundle_grants_only_the_unowned_items() {
    let store = seeded_store();
    let verifier = verifier_for("id-token", "alice@example.com", "sub-1");
    let login = login_handler(&store, verifier)
        .handle(LoginWithGoogleCommand {
            id_token: "id-token".to_string(),
        })
        .await
        .unwrap();

    PurchaseMetaphorHandler::new(store.clone(), store.clone(), store.clone())
        .handle(PurchaseMetaphorCommand {
            user_id: login.user.id,
            metaphor_id: MetaphorId::new("chess").unwrap(),
        })
        .await
        .unwrap();

    let bundles = PurchaseBundleHandler::new(store.clone(), store.clone(), store.clone());
    let grant = bundles
        .handle(PurchaseBundleCommand {
            user_id: login.user.id,
            bundle_id: BundleId::new("starter").unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(
        grant.granted,
        vec![
            MetaphorId::new("poker").unwrap(),
            MetaphorId::new("garden").unwrap()
        ]
    );
    assert_eq!(grant.already_owned, vec![MetaphorId::new("chess").unwrap()]);

    // Re-running the bundle grants nothing further.
    let again = bundles
        .handle(PurchaseBundleCommand {
            user_id: login.user.id,
            bundle_id: BundleId::new("starter").unwrap(),
        })
        .await
        .unwrap();
    assert!(again.granted.is_empty());
    assert_eq!(again.already_owned.len(), 3);
}

#[tokio::test]
async fn webhook_event_is_verified_then_reconciled_once() {
    let store = seeded_store();
    let verifier = verifier_for("id-token", "alice@example.com", "sub-1");
    let login = login_handler(&store, verifier)
        .handle(LoginWithGoogleCommand {
            id_token: "id-token".to_string(),
        })
        .await
        .unwrap();

    let payload = json!({
        "id": "evt_1",
        "type": "checkout.session.completed",
        "created": Utc::now().timestamp(),
        "livemode": false,
        "data": {
            "object": {
                "id": "cs_1",
                "customer_email": "alice@example.com",
                "amount_total": 500,
                "metadata": {
                    "user_id": login.user.id.to_string(),
                    "metaphor_id": "poker"
                }
            }
        }
    })
    .to_string();

    let secret = "whsec_test";
    let timestamp = Utc::now().timestamp();
    let signature = compute_test_signature(secret, timestamp, &payload);
    let header = format!("t={},v1={}", timestamp, signature);

    let webhook = StripeWebhookVerifier::new(secret);
    let event: StripeEvent = webhook
        .verify_and_parse(payload.as_bytes(), &header)
        .unwrap();

    // A tampered payload must not verify.
    let tampered = payload.replace("poker", "chess");
    assert!(webhook.verify_and_parse(tampered.as_bytes(), &header).is_err());

    let reconcile =
        ReconcileCheckoutHandler::new(store.clone(), store.clone(), store.clone());
    assert!(matches!(
        reconcile.handle(event.clone()).await,
        ReconcileOutcome::Granted
    ));

    // Stripe redelivers; the second delivery is absorbed.
    assert!(matches!(
        reconcile.handle(event).await,
        ReconcileOutcome::AlreadyOwned
    ));
    assert_eq!(
        store.purchase_count(&login.user.id, &MetaphorId::new("poker").unwrap()),
        1
    );
}

#[tokio::test]
async fn duplicate_subscription_is_a_conflict() {
    let store = seeded_store();
    let subscribe = SubscribeHandler::new(store.clone());

    subscribe
        .handle(SubscribeCommand {
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap();

    let err = subscribe
        .handle(SubscribeCommand {
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateRecord);
    assert_eq!(store.subscriber_count(), 1);
}

#[tokio::test]
async fn interview_invite_walks_forward_only() {
    let store = seeded_store();
    let token = InviteToken::new("inv-123").unwrap();
    store.seed_invite(InterviewInvite {
        token: token.clone(),
        candidate_email: "candidate@example.com".to_string(),
        candidate_name: Some("Cam".to_string()),
        status: InviteStatus::Pending,
        expires_at: Timestamp::now().add_days(7),
        started_at: None,
        completed_at: None,
        answers: None,
    });

    let check = ValidateInviteHandler::new(store.clone())
        .handle(ValidateInviteQuery {
            token: token.clone(),
        })
        .await
        .unwrap();
    assert!(check.open);

    let started = StartInterviewHandler::new(store.clone())
        .handle(StartInterviewCommand {
            token: token.clone(),
        })
        .await
        .unwrap();
    assert_eq!(started.status, InviteStatus::Started);

    let submit = SubmitInterviewHandler::new(store.clone());
    let completed = submit
        .handle(SubmitInterviewCommand {
            token: token.clone(),
            answers: json!({"q1": "a1"}),
        })
        .await
        .unwrap();
    assert_eq!(completed.status, InviteStatus::Completed);

    // Completed invites validate as closed and reject resubmission.
    let check = ValidateInviteHandler::new(store.clone())
        .handle(ValidateInviteQuery {
            token: token.clone(),
        })
        .await
        .unwrap();
    assert!(!check.open);

    let err = submit
        .handle(SubmitInterviewCommand {
            token,
            answers: json!({}),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InviteClosed);
}
