//! API error types

use thiserror::Error;

/// Failures below the envelope: the request never produced a usable body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout, aborted fetch...
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status on an endpoint whose contract checks the status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON
    #[error("Parse error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ClientError::Status(503).to_string(), "HTTP 503");
        assert_eq!(
            ClientError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let client_err: ClientError = err.into();
        assert!(matches!(client_err, ClientError::Decode(_)));
    }
}
