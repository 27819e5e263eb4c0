//! Bearer session lifecycle.
//!
//! A session is proof of a prior successful login: a random unguessable
//! token tied to a user id with a fixed 30-day expiry. Sessions are
//! invalidated by explicit logout (row deleted) or by expiry; expired rows
//! are not actively purged - expiry is enforced purely by comparison at
//! verification time.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp, UserId};

/// Fixed session lifetime.
pub const SESSION_TTL_DAYS: i64 = 30;

/// Token entropy in bytes (256 bits).
const TOKEN_BYTES: usize = 32;

/// Unguessable bearer credential.
///
/// 32 bytes from the OS RNG, base64 URL-safe without padding (43 chars).
/// Uniqueness is relied on statistically; no pre-check is performed and a
/// store-level collision surfaces as a generic write failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mints a fresh random token.
    pub fn mint() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Wraps an existing token string (e.g. read back from the store).
    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A bearer session row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    pub token: SessionToken,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Session {
    /// Issues a new session for a user: fresh token, expiry = now + 30 days.
    pub fn issue(user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            user_id,
            token: SessionToken::mint(),
            created_at: now,
            expires_at: now.add_days(SESSION_TTL_DAYS),
        }
    }

    /// Whether the session authorizes actions at `now`.
    ///
    /// Valid iff `expires_at` is strictly in the future; a session is
    /// invalid at the exact expiry instant.
    pub fn is_valid_at(&self, now: &Timestamp) -> bool {
        self.expires_at.is_after(now)
    }
}
