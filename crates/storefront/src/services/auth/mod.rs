//! Authentication service.
//!
//! Wraps the Wonderland API's token endpoints and keeps the session in step
//! with them. The API owns credentials and token issuance; all this service
//! stores locally is the [`CurrentUser`] snapshot in the session cookie.

mod error;

pub use error::AuthError;

use tower_sessions::Session;
use tracing::instrument;

use wonderland_core::Email;

use crate::api::{ApiClient, RegisterRequest, UserProfile};
use crate::models::CurrentUser;
use crate::models::session::keys;

/// Minimum password length enforced before hitting the API.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles login, registration, logout, and session restore.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Login with email and password, storing the identity in the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` with the API's rejection message for bad
    /// credentials, or `AuthError::Session` if the session write fails.
    #[instrument(skip(self, session, password), fields(email = %email))]
    pub async fn login(
        &self,
        session: &Session,
        email: &str,
        password: &str,
    ) -> Result<CurrentUser, AuthError> {
        let email = Email::parse(email)?;

        let response = self.api.login(email.as_str(), password).await?;
        let user = CurrentUser::new(
            response.user.id,
            response.user.email,
            response.user.first_name,
            response.user.last_name,
            response.access_token,
        );

        session.insert(keys::CURRENT_USER, &user).await?;
        tracing::info!(user_id = %user.id, "user logged in");

        Ok(user)
    }

    /// Register a new account.
    ///
    /// Registration does NOT log the user in; they land on the login form
    /// afterwards and authenticate with the credentials they just chose.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` or `AuthError::WeakPassword` for
    /// local validation failures, or `AuthError::Api` if the API rejects the
    /// registration (duplicate email).
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<UserProfile, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let profile = self
            .api
            .register(&RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            })
            .await?;

        tracing::info!(user_id = %profile.id, "user registered");
        Ok(profile)
    }

    /// Logout: discard the session.
    ///
    /// Purely local. The API is not told; the bearer token simply stops
    /// being presented and expires on its own.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Session` if deleting the session record fails.
    #[instrument(skip_all)]
    pub async fn logout(&self, session: &Session) -> Result<(), AuthError> {
        session.flush().await?;
        Ok(())
    }

    /// The cached session identity, without revalidating the token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Session` if reading the session fails.
    pub async fn current(&self, session: &Session) -> Result<Option<CurrentUser>, AuthError> {
        Ok(session.get::<CurrentUser>(keys::CURRENT_USER).await?)
    }

    /// Restore the session by revalidating its token against the API.
    ///
    /// Any failure of the validation call, including transport errors, drops
    /// the stored identity and resolves to logged-out. A stale token is never
    /// kept around to fail again on the next request.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Session` if reading or writing the session fails.
    /// API failures are not errors here; they resolve to `Ok(None)`.
    #[instrument(skip_all)]
    pub async fn restore(&self, session: &Session) -> Result<Option<CurrentUser>, AuthError> {
        let Some(cached) = session.get::<CurrentUser>(keys::CURRENT_USER).await? else {
            return Ok(None);
        };

        match self.api.me(cached.token()).await {
            Ok(profile) => {
                let user = CurrentUser::new(
                    profile.id,
                    profile.email,
                    profile.first_name,
                    profile.last_name,
                    cached.token().to_string(),
                );
                session.insert(keys::CURRENT_USER, &user).await?;
                Ok(Some(user))
            }
            Err(e) => {
                tracing::info!(user_id = %cached.id, error = %e, "session token rejected, logging out");
                session.remove::<CurrentUser>(keys::CURRENT_USER).await?;
                Ok(None)
            }
        }
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use tower_sessions::{MemoryStore, Session};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn user_body() -> serde_json::Value {
        json!({
            "id": "u1",
            "email": "alice@wonderland.com",
            "first_name": "Alice",
            "last_name": "Liddell",
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    async fn service(server: &MockServer) -> AuthService {
        AuthService::new(ApiClient::new(server.uri()))
    }

    #[tokio::test]
    async fn login_stores_identity_in_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-123",
                "token_type": "bearer",
                "user": user_body()
            })))
            .mount(&server)
            .await;

        let auth = service(&server).await;
        let session = test_session();

        let user = auth
            .login(&session, "alice@wonderland.com", "curiouser")
            .await
            .unwrap();
        assert_eq!(user.token(), "tok-123");

        let cached = auth.current(&session).await.unwrap().unwrap();
        assert_eq!(cached.email.as_str(), "alice@wonderland.com");
    }

    #[tokio::test]
    async fn login_failure_leaves_session_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "Invalid email or password"})),
            )
            .mount(&server)
            .await;

        let auth = service(&server).await;
        let session = test_session();

        let err = auth
            .login(&session, "alice@wonderland.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Invalid email or password");
        assert!(auth.current(&session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn register_does_not_log_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
            .mount(&server)
            .await;

        let auth = service(&server).await;
        let session = test_session();

        let profile = auth
            .register("alice@wonderland.com", "curiouser-and", "Alice", "Liddell")
            .await
            .unwrap();
        assert_eq!(profile.first_name, "Alice");
        assert!(auth.current(&session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn register_rejects_short_password_without_calling_api() {
        let server = MockServer::start().await;
        let auth = service(&server).await;

        let err = auth
            .register("alice@wonderland.com", "short", "Alice", "Liddell")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn restore_refreshes_profile_and_keeps_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-123",
                "token_type": "bearer",
                "user": user_body()
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("Authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1",
                "email": "alice@wonderland.com",
                "first_name": "Alice",
                "last_name": "Hargreaves",
                "created_at": "2025-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let auth = service(&server).await;
        let session = test_session();
        auth.login(&session, "alice@wonderland.com", "curiouser")
            .await
            .unwrap();

        let restored = auth.restore(&session).await.unwrap().unwrap();
        assert_eq!(restored.last_name, "Hargreaves");
        assert_eq!(restored.token(), "tok-123");
    }

    #[tokio::test]
    async fn restore_with_rejected_token_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-123",
                "token_type": "bearer",
                "user": user_body()
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})),
            )
            .mount(&server)
            .await;

        let auth = service(&server).await;
        let session = test_session();
        auth.login(&session, "alice@wonderland.com", "curiouser")
            .await
            .unwrap();

        assert!(auth.restore(&session).await.unwrap().is_none());
        assert!(auth.current(&session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn restore_without_session_identity_is_logged_out() {
        let server = MockServer::start().await;
        let auth = service(&server).await;
        let session = test_session();

        assert!(auth.restore(&session).await.unwrap().is_none());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn logout_discards_session_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-123",
                "token_type": "bearer",
                "user": user_body()
            })))
            .mount(&server)
            .await;

        let auth = service(&server).await;
        let session = test_session();
        auth.login(&session, "alice@wonderland.com", "curiouser")
            .await
            .unwrap();

        auth.logout(&session).await.unwrap();
        assert!(auth.current(&session).await.unwrap().is_none());

        // Only the login call reached the API; logout is local.
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }
}
