//! Credential submission
//!
//! Validate, send one request, store the returned session and hand back
//! where to go next. No retries and no duplicate-submit guard: two quick
//! submits produce two requests, and the later session write wins.

use thiserror::Error;

use crate::api::{ApiClient, Envelope, LoginRequest, RegisterRequest, SessionData, Transport};
use crate::routes::{Navigation, Route};
use crate::session::{Session, SessionStore};

use super::form::{Credentials, Registration};
use super::validation::FieldErrors;

/// Shown for every transport-level failure
pub const UNREACHABLE_MESSAGE: &str = "Cannot reach the server";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// A stored session and the route to open next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub session: Session,
    pub navigation: Navigation,
}

/// Why a submit did not produce a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Local validation failed; nothing was sent
    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),

    /// The server answered `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Network failure, malformed body, or success without session data
    #[error("Cannot reach the server")]
    Unreachable,

    #[error("Could not save session: {0}")]
    Storage(String),
}

impl SubmitError {
    /// Submit-level text for the form; `None` for field errors
    pub fn message(&self) -> Option<String> {
        match self {
            SubmitError::Invalid(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Errors in the shape the form renders
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            SubmitError::Invalid(errors) => errors,
            other => FieldErrors::submit(other.to_string()),
        }
    }
}

/// Log in with an email and password
pub async fn submit_login<T, S>(
    client: &ApiClient<T>,
    store: &S,
    credentials: &Credentials,
) -> Result<Authenticated, SubmitError>
where
    T: Transport,
    S: SessionStore + ?Sized,
{
    credentials.validate().map_err(SubmitError::Invalid)?;

    let body = LoginRequest {
        username: credentials.email.clone(),
        email: credentials.email.clone(),
        password: credentials.password.clone(),
    };
    let envelope = client.login(&body).await.map_err(|e| {
        tracing::warn!(error = %e, "Login request failed");
        SubmitError::Unreachable
    })?;

    accept(envelope, store, LOGIN_FAILED_MESSAGE)
}

/// Create an account and log in with it
pub async fn submit_register<T, S>(
    client: &ApiClient<T>,
    store: &S,
    registration: &Registration,
) -> Result<Authenticated, SubmitError>
where
    T: Transport,
    S: SessionStore + ?Sized,
{
    registration.validate().map_err(SubmitError::Invalid)?;

    let body = RegisterRequest {
        username: registration.username.clone(),
        email: registration.email.clone(),
        password: registration.password.clone(),
        confirm_password: registration.confirm_password.clone(),
    };
    let envelope = client.register(&body).await.map_err(|e| {
        tracing::warn!(error = %e, "Register request failed");
        SubmitError::Unreachable
    })?;

    accept(envelope, store, REGISTRATION_FAILED_MESSAGE)
}

fn accept<S>(
    envelope: Envelope<SessionData>,
    store: &S,
    fallback: &str,
) -> Result<Authenticated, SubmitError>
where
    S: SessionStore + ?Sized,
{
    if !envelope.success {
        let message = envelope.message_or(fallback);
        tracing::info!(%message, "Credentials rejected");
        return Err(SubmitError::Rejected(message));
    }

    let session: Session = envelope
        .data
        .ok_or_else(|| {
            tracing::warn!("Successful envelope without session data");
            SubmitError::Unreachable
        })?
        .into();

    store
        .set(&session)
        .map_err(|e| SubmitError::Storage(e.to_string()))?;
    tracing::info!(user_id = %session.user_id, "Session stored");

    Ok(Authenticated {
        session,
        navigation: Navigation::to(Route::Dashboard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTransport;
    use crate::auth::Field;
    use crate::session::{MemorySessionStore, TOKEN_KEY, USER_ID_KEY};
    use serde_json::json;

    fn api(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport, "http://api.test")
    }

    fn registration() -> Registration {
        Registration {
            username: "ann".into(),
            email: "ann@example.com".into(),
            password: "Secret123".into(),
            confirm_password: "Secret123".into(),
            agree_to_terms: true,
        }
    }

    #[tokio::test]
    async fn test_empty_email_blocks_request() {
        let client = api(MockTransport::new());
        let store = MemorySessionStore::new();

        let err = submit_login(&client, &store, &Credentials::new("", "secret1"))
            .await
            .unwrap_err();

        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.get(Field::Email), Some("Email is required"))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(client.transport().request_count(), 0);
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_short_password_blocks_request() {
        let client = api(MockTransport::new());
        let store = MemorySessionStore::new();

        let err = submit_login(&client, &store, &Credentials::new("ann@example.com", "12345"))
            .await
            .unwrap_err();
        let errors = err.into_field_errors();
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_login_stores_session() {
        let client = api(MockTransport::new().respond_json(
            200,
            json!({"success": true, "data": {"accessToken": "t1", "userId": "u1"}}),
        ));
        let store = MemorySessionStore::new();

        let auth = submit_login(&client, &store, &Credentials::new("ann@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(auth.navigation.href(), "/dashboard");
        assert_eq!(auth.session, Session::new("t1", "u1"));
        assert_eq!(store.item(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(store.item(USER_ID_KEY).as_deref(), Some("u1"));
        assert_eq!(store.writes(), 1);

        let sent: serde_json::Value =
            serde_json::from_str(client.transport().requests()[0].body.as_deref().unwrap())
                .unwrap();
        assert_eq!(
            sent,
            json!({"username": "ann@example.com", "email": "ann@example.com", "password": "secret1"})
        );
    }

    #[tokio::test]
    async fn test_rejected_login_surfaces_message() {
        let client = api(
            MockTransport::new().respond_json(200, json!({"success": false, "message": "bad creds"})),
        );
        let store = MemorySessionStore::new();

        let err = submit_login(&client, &store, &Credentials::new("ann@example.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Rejected("bad creds".into()));
        assert_eq!(err.message().as_deref(), Some("bad creds"));
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_rejected_without_message_uses_fallback() {
        let client = api(
            MockTransport::new()
                .respond_json(500, json!({"success": false}))
                .respond_json(200, json!({"success": false, "message": ""})),
        );
        let store = MemorySessionStore::new();

        let err = submit_login(&client, &store, &Credentials::new("ann@example.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::Rejected("Login failed".into()));

        let err = submit_register(&client, &store, &registration())
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::Rejected("Registration failed".into()));
    }

    #[tokio::test]
    async fn test_transport_and_decode_failures_are_unreachable() {
        let client = api(
            MockTransport::new()
                .fail("connection refused")
                .respond_text(200, "<html>oops</html>")
                .respond_json(200, json!({"success": true})),
        );
        let store = MemorySessionStore::new();
        let credentials = Credentials::new("ann@example.com", "secret1");

        for _ in 0..3 {
            let err = submit_login(&client, &store, &credentials).await.unwrap_err();
            assert_eq!(err, SubmitError::Unreachable);
            assert_eq!(err.message().as_deref(), Some(UNREACHABLE_MESSAGE));
        }
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_register_sends_confirm_password() {
        let client = api(MockTransport::new().respond_json(
            201,
            json!({"success": true, "message": "created", "data": {"accessToken": "t2", "userId": 7}}),
        ));
        let store = MemorySessionStore::with_session(&Session::new("old", "u0"));

        let auth = submit_register(&client, &store, &registration()).await.unwrap();
        assert_eq!(auth.session, Session::new("t2", "7"));
        assert_eq!(store.get(), Some(Session::new("t2", "7")));

        let request = &client.transport().requests()[0];
        assert_eq!(request.url, "http://api.test/api/account/register");
        let sent: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["confirmPassword"], "Secret123");
    }

    #[tokio::test]
    async fn test_invalid_registration_not_sent() {
        let client = api(MockTransport::new());
        let store = MemorySessionStore::new();
        let mut reg = registration();
        reg.agree_to_terms = false;

        let err = submit_register(&client, &store, &reg).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert!(err.message().is_none());
        assert_eq!(client.transport().request_count(), 0);
    }
}
