//! In-memory implementation of the store ports.
//!
//! Substitutes for the PostgreSQL adapters in tests. Enforces the same
//! uniqueness rules the migration declares (user email / google_sub,
//! session token, subscriber email, purchase pair) and surfaces them as
//! the same typed `DuplicateRecord` conflict.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::catalog::{Bundle, Metaphor};
use crate::domain::foundation::{
    BundleId, DomainError, InviteToken, MetaphorId, UserId,
};
use crate::domain::inbox::{Feedback, Subscriber, Suggestion};
use crate::domain::interview::InterviewInvite;
use crate::domain::purchase::Purchase;
use crate::domain::session::Session;
use crate::domain::user::User;
use crate::ports::{
    CatalogReader, InboxWriter, InviteRepository, PurchaseRepository, SessionRepository,
    UserRepository,
};

/// All store tables behind mutexes.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    sessions: Mutex<Vec<Session>>,
    purchases: Mutex<Vec<Purchase>>,
    metaphors: Mutex<Vec<Metaphor>>,
    bundles: Mutex<Vec<Bundle>>,
    subscribers: Mutex<Vec<Subscriber>>,
    suggestions: Mutex<Vec<Suggestion>>,
    feedback: Mutex<Vec<Feedback>>,
    invites: Mutex<Vec<InterviewInvite>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── seeding helpers ──────────────────────────────────────────────

    pub fn seed_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn seed_metaphor(&self, metaphor: Metaphor) {
        self.metaphors.lock().unwrap().push(metaphor);
    }

    pub fn seed_bundle(&self, bundle: Bundle) {
        self.bundles.lock().unwrap().push(bundle);
    }

    pub fn seed_invite(&self, invite: InterviewInvite) {
        self.invites.lock().unwrap().push(invite);
    }

    // ── assertion helpers ────────────────────────────────────────────

    /// Number of purchase rows for the pair (at most one per
    /// (user, metaphor) pair).
    pub fn purchase_count(&self, user_id: &UserId, metaphor_id: &MetaphorId) -> usize {
        self.purchases
            .lock()
            .unwrap()
            .iter()
            .filter(|p| &p.user_id == user_id && &p.metaphor_id == metaphor_id)
            .count()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.lock().unwrap().len()
    }

    pub fn feedback_count(&self) -> usize {
        self.feedback.lock().unwrap().len()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        let clash = users.iter().any(|u| {
            u.email == user.email
                || (u.google_sub.is_some() && u.google_sub == user.google_sub)
        });
        if clash {
            return Err(DomainError::duplicate("user email or subject exists"));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == id)
            .cloned())
    }

    async fn find_by_google_sub(&self, sub: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.google_sub.as_deref() == Some(sub))
            .cloned())
    }

    async fn update_profile(
        &self,
        id: &UserId,
        name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| &u.id == id) {
            if let Some(name) = name {
                user.name = Some(name.to_string());
            }
            if let Some(avatar_url) = avatar_url {
                user.avatar_url = Some(avatar_url.to_string());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        if sessions.iter().any(|s| s.token == session.token) {
            return Err(DomainError::database("session token collision"));
        }
        sessions.push(session.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.token.as_str() == token)
            .cloned())
    }

    async fn delete_by_token(&self, token: &str) -> Result<(), DomainError> {
        self.sessions
            .lock()
            .unwrap()
            .retain(|s| s.token.as_str() != token);
        Ok(())
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryStore {
    async fn exists(
        &self,
        user_id: &UserId,
        metaphor_id: &MetaphorId,
    ) -> Result<bool, DomainError> {
        Ok(self.purchase_count(user_id, metaphor_id) > 0)
    }

    async fn insert(&self, purchase: &Purchase) -> Result<(), DomainError> {
        let mut purchases = self.purchases.lock().unwrap();
        let clash = purchases
            .iter()
            .any(|p| p.user_id == purchase.user_id && p.metaphor_id == purchase.metaphor_id);
        if clash {
            return Err(DomainError::duplicate("purchase pair exists"));
        }
        purchases.push(purchase.clone());
        Ok(())
    }

    async fn insert_many(&self, batch: &[Purchase]) -> Result<(), DomainError> {
        let mut purchases = self.purchases.lock().unwrap();
        for purchase in batch {
            let clash = purchases
                .iter()
                .any(|p| p.user_id == purchase.user_id && p.metaphor_id == purchase.metaphor_id);
            if !clash {
                purchases.push(purchase.clone());
            }
        }
        Ok(())
    }

    async fn owned_subset(
        &self,
        user_id: &UserId,
        metaphor_ids: &[MetaphorId],
    ) -> Result<Vec<MetaphorId>, DomainError> {
        Ok(self
            .purchases
            .lock()
            .unwrap()
            .iter()
            .filter(|p| &p.user_id == user_id && metaphor_ids.contains(&p.metaphor_id))
            .map(|p| p.metaphor_id.clone())
            .collect())
    }

    async fn list_metaphor_ids(&self, user_id: &UserId) -> Result<Vec<MetaphorId>, DomainError> {
        Ok(self
            .purchases
            .lock()
            .unwrap()
            .iter()
            .filter(|p| &p.user_id == user_id)
            .map(|p| p.metaphor_id.clone())
            .collect())
    }
}

#[async_trait]
impl CatalogReader for InMemoryStore {
    async fn list_metaphors(&self) -> Result<Vec<Metaphor>, DomainError> {
        let mut metaphors = self.metaphors.lock().unwrap().clone();
        metaphors.sort_by_key(|m| m.order_index);
        Ok(metaphors)
    }

    async fn find_metaphor(&self, id: &MetaphorId) -> Result<Option<Metaphor>, DomainError> {
        Ok(self
            .metaphors
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.id == id)
            .cloned())
    }

    async fn find_bundle(&self, id: &BundleId) -> Result<Option<Bundle>, DomainError> {
        Ok(self
            .bundles
            .lock()
            .unwrap()
            .iter()
            .find(|b| &b.id == id && b.active)
            .cloned())
    }
}

#[async_trait]
impl InboxWriter for InMemoryStore {
    async fn add_subscriber(&self, subscriber: &Subscriber) -> Result<(), DomainError> {
        let mut subscribers = self.subscribers.lock().unwrap();
        if subscribers.iter().any(|s| s.email == subscriber.email) {
            return Err(DomainError::duplicate("email already subscribed"));
        }
        subscribers.push(subscriber.clone());
        Ok(())
    }

    async fn add_suggestion(&self, suggestion: &Suggestion) -> Result<(), DomainError> {
        self.suggestions.lock().unwrap().push(suggestion.clone());
        Ok(())
    }

    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), DomainError> {
        self.feedback.lock().unwrap().push(feedback.clone());
        Ok(())
    }
}

#[async_trait]
impl InviteRepository for InMemoryStore {
    async fn find_by_token(
        &self,
        token: &InviteToken,
    ) -> Result<Option<InterviewInvite>, DomainError> {
        Ok(self
            .invites
            .lock()
            .unwrap()
            .iter()
            .find(|i| &i.token == token)
            .cloned())
    }

    async fn update(&self, invite: &InterviewInvite) -> Result<(), DomainError> {
        let mut invites = self.invites.lock().unwrap();
        if let Some(pos) = invites.iter().position(|i| i.token == invite.token) {
            invites[pos] = invite.clone();
        }
        Ok(())
    }
}
