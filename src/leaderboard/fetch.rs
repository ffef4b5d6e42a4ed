//! Leaderboard loading
//!
//! One GET per mount. [`load_cancellable`] ties the request to a
//! [`LoadHandle`]; aborting (or dropping) the handle resolves the future
//! with [`LoadError::Cancelled`], which callers drop silently.

use std::future::Future;

use futures_util::future::{AbortHandle, Abortable};
use thiserror::Error;

use crate::api::{ApiClient, ClientError, Transport};
use crate::session::SessionStore;

use super::normalize::{normalize, Leaderboard};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch leaderboard";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Aborted because the view went away; not shown to the user
    #[error("Request cancelled")]
    Cancelled,

    /// Displayable failure
    #[error("{0}")]
    Failed(String),
}

impl LoadError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}

impl From<ClientError> for LoadError {
    fn from(err: ClientError) -> Self {
        let message = match err {
            ClientError::Status(status) => format!("HTTP {}", status),
            ClientError::Network(message) | ClientError::Decode(message) => {
                if message.is_empty() {
                    NETWORK_ERROR_MESSAGE.to_string()
                } else {
                    message
                }
            }
        };
        LoadError::Failed(message)
    }
}

/// Fetch and normalize the leaderboard. The stored token, if any, is sent
/// as a bearer token.
pub async fn load<T, S>(client: &ApiClient<T>, store: &S) -> Result<Leaderboard, LoadError>
where
    T: Transport,
    S: SessionStore + ?Sized,
{
    let token = store.token();
    let envelope = client.leaderboard(token.as_deref()).await?;

    if !envelope.success {
        return Err(LoadError::Failed(envelope.message_or(FETCH_FAILED_MESSAGE)));
    }

    let board = normalize(envelope.data.as_ref().unwrap_or(&serde_json::Value::Null));
    tracing::debug!(
        entries = board.entries.len(),
        has_current_user = board.current_user.is_some(),
        "Leaderboard loaded"
    );
    Ok(board)
}

/// Cancels an in-flight [`load_cancellable`] future
#[derive(Debug)]
pub struct LoadHandle {
    abort: AbortHandle,
}

impl LoadHandle {
    pub fn abort(&self) {
        self.abort.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// [`load`] bound to a handle owned by the view
pub fn load_cancellable<'a, T, S>(
    client: &'a ApiClient<T>,
    store: &'a S,
) -> (
    impl Future<Output = Result<Leaderboard, LoadError>> + 'a,
    LoadHandle,
)
where
    T: Transport + 'a,
    S: SessionStore + ?Sized + 'a,
{
    cancellable(load(client, store))
}

/// Wrap any load future so a [`LoadHandle`] can abort it. Useful when the
/// future must own its client, as in a browser task.
pub fn cancellable<F>(load: F) -> (impl Future<Output = Result<Leaderboard, LoadError>>, LoadHandle)
where
    F: Future<Output = Result<Leaderboard, LoadError>>,
{
    let (abort, registration) = AbortHandle::new_pair();
    let future = Abortable::new(load, registration);

    let future = async move {
        match future.await {
            Ok(result) => result,
            Err(_aborted) => {
                tracing::debug!("Leaderboard request aborted");
                Err(LoadError::Cancelled)
            }
        }
    };

    (future, LoadHandle { abort })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTransport;
    use crate::leaderboard::{LeaderboardAction, LeaderboardState};
    use crate::session::{MemorySessionStore, Session};
    use serde_json::json;

    fn api(transport: MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport, "http://api.test")
    }

    #[tokio::test]
    async fn test_nested_payload_end_to_end() {
        let client = api(MockTransport::new().respond_json(
            200,
            json!({
                "success": true,
                "data": {
                    "leaderboard": [
                        {"user": {"userId": "u1", "userProfile": {"username": "Ann"}}, "totalPoints": 50}
                    ],
                    "currentUser": {"userId": "u1", "rank": 12}
                }
            }),
        ));
        let store = MemorySessionStore::with_session(&Session::new("t1", "u1"));

        let board = load(&client, &store).await.unwrap();
        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.entries[0].name, "Ann");
        assert_eq!(board.entries[0].xp, 50);
        assert_eq!(board.entries[0].rank, 1);
        assert_eq!(board.entries[0].user_id.as_deref(), Some("u1"));
        assert!(board.shows_rank_banner());

        let request = &client.transport().requests()[0];
        assert_eq!(request.url, "http://api.test/api/leaderboard");
        assert_eq!(request.header_value("authorization"), Some("Bearer t1"));
    }

    #[tokio::test]
    async fn test_missing_token_sends_no_authorization() {
        let client = api(MockTransport::new().respond_json(200, json!({"success": true, "data": []})));
        let store = MemorySessionStore::new();

        let board = load(&client, &store).await.unwrap();
        assert!(board.entries.is_empty());
        assert_eq!(client.transport().requests()[0].header_value("authorization"), None);
    }

    #[tokio::test]
    async fn test_error_messages() {
        let client = api(
            MockTransport::new()
                .respond_text(502, "bad gateway")
                .respond_json(200, json!({"success": false}))
                .respond_json(200, json!({"success": false, "message": "maintenance"}))
                .fail("connection refused")
                .fail(""),
        );
        let store = MemorySessionStore::new();

        let mut messages = Vec::new();
        for _ in 0..5 {
            messages.push(load(&client, &store).await.unwrap_err().to_string());
        }
        assert_eq!(
            messages,
            vec![
                "HTTP 502",
                "Failed to fetch leaderboard",
                "maintenance",
                "connection refused",
                "Network error"
            ]
        );
    }

    #[tokio::test]
    async fn test_abort_is_silent() {
        let client = api(MockTransport::new().hang());
        let store = MemorySessionStore::new();
        let state = LeaderboardState::new().reduce(LeaderboardAction::Started);

        let (future, handle) = load_cancellable(&client, &store);
        handle.abort();
        assert!(handle.is_aborted());

        let result = future.await;
        assert_eq!(result, Err(LoadError::Cancelled));

        let after = state.clone().reduce(LeaderboardAction::Cancelled);
        assert_eq!(after, state);
        assert!(after.error.is_none());
    }

    #[tokio::test]
    async fn test_dropping_handle_cancels() {
        let client = api(MockTransport::new().hang());
        let store = MemorySessionStore::new();

        let (future, handle) = load_cancellable(&client, &store);
        drop(handle);
        assert!(future.await.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_abort_while_pending() {
        let client = api(MockTransport::new().hang());
        let store = MemorySessionStore::new();

        let (future, handle) = load_cancellable(&client, &store);
        let abort_later = async {
            tokio::task::yield_now().await;
            handle.abort();
        };
        let (result, ()) = tokio::join!(future, abort_later);
        assert_eq!(result, Err(LoadError::Cancelled));
        assert_eq!(client.transport().request_count(), 1);
    }
}
