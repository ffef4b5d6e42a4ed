//! HTTP Transport
//!
//! Sends the core client's requests with the browser's `fetch`.

use async_trait::async_trait;
use gloo_net::http::{Method as GlooMethod, RequestBuilder};
use web_sys::{AbortSignal, RequestCredentials};

use lingulu::api::{ApiClient, ClientError, HttpRequest, HttpResponse, Method, Transport};
use lingulu::api::DEFAULT_API_BASE;

/// Backend base URL, fixed at build time through `LINGULU_API_URL`
pub fn api_base() -> String {
    option_env!("LINGULU_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Client for requests that live as long as the page
pub fn client() -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport::new(), api_base())
}

/// Client whose requests are aborted with `signal`
pub fn client_with_signal(signal: AbortSignal) -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport::new().with_abort_signal(signal), api_base())
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Default)]
pub struct GlooTransport {
    signal: Option<AbortSignal>,
}

impl GlooTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an `AbortController` signal to every request
    pub fn with_abort_signal(mut self, signal: AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = match request.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
        };

        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .abort_signal(self.signal.as_ref());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if request.with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}
