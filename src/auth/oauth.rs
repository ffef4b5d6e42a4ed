//! OAuth redirect handling
//!
//! After Google sign-in the backend redirects the browser to
//! `/oauth2/success` with a session cookie. The handler trades that cookie
//! for a token pair and always resolves to a navigation.

use std::fmt;

use crate::api::{ApiClient, ClientError, Transport};
use crate::routes::{Navigation, Route};
use crate::session::{Session, SessionStore};

/// Query key carrying the failure marker back to the login page
pub const ERROR_QUERY_KEY: &str = "error";

/// Failure marker appended to `/login`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthFailure {
    /// The backend answered with a non-2xx status
    OAuthFailed,
    /// The request itself failed, or the answer was unusable
    NetworkError,
}

impl OAuthFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthFailure::OAuthFailed => "oauth_failed",
            OAuthFailure::NetworkError => "network_error",
        }
    }

    /// Banner text for the login page
    pub fn message(&self) -> &'static str {
        match self {
            OAuthFailure::OAuthFailed => "Google sign-in failed",
            OAuthFailure::NetworkError => "Could not reach the server during Google sign-in",
        }
    }

    /// Read the marker from a login page query string (`?error=...`)
    pub fn from_query(query: &str) -> Option<Self> {
        crate::routes::parse_query(query)
            .into_iter()
            .find(|(key, _)| key == ERROR_QUERY_KEY)
            .and_then(|(_, value)| Self::from_code(&value))
    }

    /// Parse the bare marker value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "oauth_failed" => Some(OAuthFailure::OAuthFailed),
            "network_error" => Some(OAuthFailure::NetworkError),
            _ => None,
        }
    }

    pub fn navigation(&self) -> Navigation {
        Navigation::to(Route::Login).with_query(ERROR_QUERY_KEY, self.as_str())
    }
}

impl fmt::Display for OAuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetch the OAuth session, store it and decide where to go
pub async fn complete_oauth<T, S>(client: &ApiClient<T>, store: &S) -> Navigation
where
    T: Transport,
    S: SessionStore + ?Sized,
{
    match try_complete(client, store).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user_id, "OAuth session stored");
            Navigation::to(Route::Dashboard)
        }
        Err(failure) => failure.navigation(),
    }
}

async fn try_complete<T, S>(client: &ApiClient<T>, store: &S) -> Result<Session, OAuthFailure>
where
    T: Transport,
    S: SessionStore + ?Sized,
{
    let envelope = client.oauth_session().await.map_err(|e| match e {
        ClientError::Status(status) => {
            tracing::warn!(status, "OAuth data request rejected");
            OAuthFailure::OAuthFailed
        }
        other => {
            tracing::warn!(error = %other, "OAuth data request failed");
            OAuthFailure::NetworkError
        }
    })?;

    let session: Session = envelope
        .data
        .ok_or_else(|| {
            tracing::warn!("OAuth response carried no session data");
            OAuthFailure::NetworkError
        })?
        .into();

    store.set(&session).map_err(|e| {
        tracing::warn!(error = %e, "Failed to store OAuth session");
        OAuthFailure::NetworkError
    })?;

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTransport;
    use crate::session::MemorySessionStore;
    use serde_json::json;

    fn api(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport, "http://api.test")
    }

    #[tokio::test]
    async fn test_ok_response_stores_and_goes_to_dashboard() {
        let client = api(MockTransport::new().respond_json(
            200,
            json!({"success": true, "data": {"accessToken": "g1", "userId": "u9"}}),
        ));
        let store = MemorySessionStore::new();

        let nav = complete_oauth(&client, &store).await;
        assert_eq!(nav.href(), "/dashboard");
        assert_eq!(store.get(), Some(Session::new("g1", "u9")));

        let request = &client.transport().requests()[0];
        assert_eq!(request.url, "http://api.test/api/account/oauth2/data");
        assert!(request.with_credentials);
    }

    #[tokio::test]
    async fn test_non_ok_is_oauth_failed() {
        let client = api(MockTransport::new().respond_text(401, "unauthorized"));
        let store = MemorySessionStore::new();

        let nav = complete_oauth(&client, &store).await;
        assert_eq!(nav.href(), "/login?error=oauth_failed");
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn test_network_and_decode_errors() {
        let client = api(
            MockTransport::new()
                .fail("connection reset")
                .respond_text(200, "not json")
                .respond_json(200, json!({"success": true, "data": null})),
        );
        let store = MemorySessionStore::new();

        for _ in 0..3 {
            let nav = complete_oauth(&client, &store).await;
            assert_eq!(nav.href(), "/login?error=network_error");
        }
        assert!(store.get().is_none());
    }

    #[test]
    fn test_failure_from_query() {
        assert_eq!(
            OAuthFailure::from_query("error=oauth_failed"),
            Some(OAuthFailure::OAuthFailed)
        );
        assert_eq!(
            OAuthFailure::from_query("?foo=1&error=network_error"),
            Some(OAuthFailure::NetworkError)
        );
        assert_eq!(OAuthFailure::from_query("error=other"), None);
        assert_eq!(OAuthFailure::from_query(""), None);
    }

    #[test]
    fn test_failure_navigation_round_trip() {
        let nav = OAuthFailure::NetworkError.navigation();
        assert_eq!(nav.route, Route::Login);
        assert_eq!(nav.query_value(ERROR_QUERY_KEY), Some("network_error"));
    }
}
