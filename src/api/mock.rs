//! Scripted transport
//!
//! Replies are consumed in order, one per request. Every request is
//! recorded before it is answered, so tests can assert on what was sent
//! even when the reply never arrives.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::transport::{HttpRequest, HttpResponse, Transport};
use super::ClientError;

#[derive(Debug, Clone)]
enum Reply {
    Respond(HttpResponse),
    Fail(String),
    /// Never resolves; used to exercise cancellation
    Hang,
}

/// In-memory [`Transport`] for tests and offline demos
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Reply::Respond(HttpResponse::new(status, body.to_string())))
    }

    pub fn respond_text(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Reply::Respond(HttpResponse::new(status, body)))
    }

    /// Fail the next request as a network error
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Reply::Fail(message.into()))
    }

    /// Leave the next request pending forever
    pub fn hang(self) -> Self {
        self.push(Reply::Hang)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.borrow_mut().push(request);
        let reply = self.replies.borrow_mut().pop_front();

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(ClientError::Network(message)),
            Some(Reply::Hang) => futures_util::future::pending().await,
            None => Err(ClientError::Network("no scripted reply".to_string())),
        }
    }
}
