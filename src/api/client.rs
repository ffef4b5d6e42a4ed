//! Lingulu API client
//!
//! Builds requests for the four backend endpoints and decodes their
//! envelopes. Status handling differs per endpoint: the account endpoints
//! let the envelope decide, while the OAuth data and leaderboard endpoints
//! reject non-2xx responses before decoding.

use super::dto::{Envelope, LoginRequest, RegisterRequest, SessionData};
use super::transport::{HttpRequest, HttpResponse, Transport};
use super::ClientError;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

pub const LOGIN_PATH: &str = "/api/account/login";
pub const REGISTER_PATH: &str = "/api/account/register";
pub const OAUTH_DATA_PATH: &str = "/api/account/oauth2/data";
pub const LEADERBOARD_PATH: &str = "/api/leaderboard";

/// Browser redirect target that starts the Google OAuth flow
pub const GOOGLE_AUTHORIZATION_PATH: &str = "/oauth2/authorization/google";

/// Lingulu backend client over any [`Transport`]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client for `base_url` (a trailing slash is ignored)
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            default_headers: Vec::new(),
        }
    }

    /// Header added to every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Where the browser goes to start Google sign-in
    pub fn google_authorization_url(&self) -> String {
        self.url(GOOGLE_AUTHORIZATION_PATH)
    }

    /// `POST /api/account/login`. The status code is not consulted.
    pub async fn login(&self, body: &LoginRequest) -> Result<Envelope<SessionData>, ClientError> {
        let request = HttpRequest::post_json(self.url(LOGIN_PATH), body)?;
        self.execute(LOGIN_PATH, request).await?.json()
    }

    /// `POST /api/account/register`. The status code is not consulted.
    pub async fn register(
        &self,
        body: &RegisterRequest,
    ) -> Result<Envelope<SessionData>, ClientError> {
        let request = HttpRequest::post_json(self.url(REGISTER_PATH), body)?;
        self.execute(REGISTER_PATH, request).await?.json()
    }

    /// `GET /api/account/oauth2/data` with cookies included
    pub async fn oauth_session(&self) -> Result<Envelope<SessionData>, ClientError> {
        let request = HttpRequest::get(self.url(OAUTH_DATA_PATH)).with_credentials();
        let response = self.execute(OAUTH_DATA_PATH, request).await?;
        if !response.ok() {
            return Err(ClientError::Status(response.status));
        }
        response.json()
    }

    /// `GET /api/leaderboard`
    ///
    /// The bearer header is only sent for a non-empty token. `data` is left
    /// as raw JSON because its shape varies between backend versions.
    pub async fn leaderboard(
        &self,
        token: Option<&str>,
    ) -> Result<Envelope<serde_json::Value>, ClientError> {
        let mut request = HttpRequest::get(self.url(LEADERBOARD_PATH))
            .header("Accept", "application/json")
            .with_credentials();
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = self.execute(LEADERBOARD_PATH, request).await?;
        if !response.ok() {
            return Err(ClientError::Status(response.status));
        }
        response.json()
    }

    async fn execute(
        &self,
        endpoint: &str,
        mut request: HttpRequest,
    ) -> Result<HttpResponse, ClientError> {
        let request_id = uuid::Uuid::new_v4();
        for (name, value) in &self.default_headers {
            request = request.header(name.clone(), value.clone());
        }

        tracing::debug!(%request_id, endpoint, method = ?request.method, "Sending request");
        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(%request_id, endpoint, status = response.status, "Response received");
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(%request_id, endpoint, error = %e, "Request failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockTransport, Method};

    fn client(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport, "http://api.test/")
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let api = client(MockTransport::new());
        assert_eq!(api.base_url(), "http://api.test");
        assert_eq!(api.url(LOGIN_PATH), "http://api.test/api/account/login");
        assert_eq!(
            api.google_authorization_url(),
            "http://api.test/oauth2/authorization/google"
        );
    }

    #[tokio::test]
    async fn test_login_ignores_status() {
        let transport = MockTransport::new().respond_json(
            401,
            serde_json::json!({"success": false, "message": "bad creds"}),
        );
        let api = client(transport);

        let body = LoginRequest {
            username: "a@b.co".into(),
            email: "a@b.co".into(),
            password: "secret1".into(),
        };
        let envelope = api.login(&body).await.unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("bad creds"));

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://api.test/api/account/login");
    }

    #[tokio::test]
    async fn test_oauth_session_rejects_non_ok() {
        let api = client(MockTransport::new().respond_text(403, "forbidden"));
        assert_eq!(api.oauth_session().await, Err(ClientError::Status(403)));
        assert!(api.transport().requests()[0].with_credentials);
    }

    #[tokio::test]
    async fn test_leaderboard_bearer_only_with_token() {
        let body = serde_json::json!({"success": true, "data": []});
        let api = client(
            MockTransport::new()
                .respond_json(200, body.clone())
                .respond_json(200, body.clone())
                .respond_json(200, body),
        );

        api.leaderboard(Some("t1")).await.unwrap();
        api.leaderboard(None).await.unwrap();
        api.leaderboard(Some("")).await.unwrap();

        let requests = api.transport().requests();
        assert_eq!(requests[0].header_value("authorization"), Some("Bearer t1"));
        assert_eq!(requests[1].header_value("authorization"), None);
        assert_eq!(requests[2].header_value("authorization"), None);
        for request in &requests {
            assert_eq!(request.header_value("accept"), Some("application/json"));
            assert!(request.with_credentials);
        }
    }

    #[tokio::test]
    async fn test_default_headers_applied() {
        let api = client(MockTransport::new().respond_json(200, serde_json::json!({})))
            .with_header("X-Client", "lingulu-cli");
        api.oauth_session().await.unwrap();
        assert_eq!(
            api.transport().requests()[0].header_value("x-client"),
            Some("lingulu-cli")
        );
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let api = client(MockTransport::new().fail("connection refused"));
        let err = api.leaderboard(None).await.unwrap_err();
        assert_eq!(err, ClientError::Network("connection refused".into()));
    }
}
