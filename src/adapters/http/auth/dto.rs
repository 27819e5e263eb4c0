//! Wire types for the auth endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::auth::LoginResult;
use crate::domain::session::Session;
use crate::domain::user::User;

/// Body of `POST /api/auth/google`: the ID token from the Google Sign-In
/// widget. The field is `idToken` on the wire; `credential` (the raw name
/// of the widget callback field) is accepted as an alias.
#[derive(Debug, Deserialize)]
pub struct GoogleLoginRequest {
    #[serde(rename = "idToken", alias = "credential")]
    pub id_token: String,
}

/// Public shape of a user profile.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// The session credential as the client stores it.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token.as_str().to_string(),
            expires_at: session.expires_at.to_rfc3339(),
        }
    }
}

/// Response to a successful login: the profile plus the session
/// credential, each under its own key.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub session: SessionResponse,
}

impl From<&LoginResult> for LoginResponse {
    fn from(result: &LoginResult) -> Self {
        Self {
            user: UserResponse::from(&result.user),
            session: SessionResponse::from(&result.session),
        }
    }
}

/// Response to logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::VerifiedIdentity;

    fn login_result() -> LoginResult {
        let identity =
            VerifiedIdentity::new("sub-1", "alice@example.com", Some("Alice".into()), None)
                .unwrap();
        let user = User::from_identity(&identity);
        let session = Session::issue(user.id);
        LoginResult { user, session }
    }

    #[test]
    fn login_request_reads_the_id_token_field() {
        let body: GoogleLoginRequest =
            serde_json::from_str(r#"{"idToken":"abc"}"#).unwrap();
        assert_eq!(body.id_token, "abc");
    }

    #[test]
    fn login_request_accepts_the_credential_alias() {
        let body: GoogleLoginRequest =
            serde_json::from_str(r#"{"credential":"abc"}"#).unwrap();
        assert_eq!(body.id_token, "abc");
    }

    #[test]
    fn login_response_nests_user_and_session() {
        let result = login_result();
        let json = serde_json::to_value(LoginResponse::from(&result)).unwrap();

        assert_eq!(json["user"]["email"], "alice@example.com");
        assert_eq!(json["session"]["token"], result.session.token.as_str());
        assert!(json["session"]["expires_at"].is_string());
    }
}
