//! Data Transfer Objects
//!
//! Request bodies and the response envelope shared by all endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::session::Session;

/// Uniform response wrapper: `{ success, message, data }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Missing counts as `false`
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The server message, or `fallback` when it is missing or empty
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Session payload returned by login, register and the OAuth data endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub access_token: String,
    /// Some backends send a numeric id; it is stored as its decimal string
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
}

impl From<SessionData> for Session {
    fn from(data: SessionData) -> Self {
        Session::new(data.access_token, data.user_id)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for userId, got {}",
            other
        ))),
    }
}

/// `POST /api/account/login` body. The login form only asks for an email,
/// which is sent as both `username` and `email`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `POST /api/account/register` body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_session() {
        let json = r#"{"success":true,"message":"ok","data":{"accessToken":"t1","userId":"u1"}}"#;
        let envelope: Envelope<SessionData> = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        let session: Session = envelope.data.unwrap().into();
        assert_eq!(session, Session::new("t1", "u1"));
    }

    #[test]
    fn test_envelope_missing_fields() {
        let envelope: Envelope<SessionData> = serde_json::from_str("{}").unwrap();
        assert!(!envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());

        let envelope: Envelope<SessionData> =
            serde_json::from_str(r#"{"success":false,"data":null}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_message_fallback() {
        let envelope: Envelope<()> = serde_json::from_str(r#"{"success":false,"message":""}"#).unwrap();
        assert_eq!(envelope.message_or("Login failed"), "Login failed");

        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success":false,"message":"bad creds"}"#).unwrap();
        assert_eq!(envelope.message_or("Login failed"), "bad creds");
    }

    #[test]
    fn test_numeric_user_id() {
        let data: SessionData =
            serde_json::from_str(r#"{"accessToken":"t","userId":42}"#).unwrap();
        assert_eq!(data.user_id, "42");

        let err = serde_json::from_str::<SessionData>(r#"{"accessToken":"t","userId":true}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_register_body_shape() {
        let body = RegisterRequest {
            username: "ann".into(),
            email: "ann@example.com".into(),
            password: "Secret123".into(),
            confirm_password: "Secret123".into(),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({
                "username": "ann",
                "email": "ann@example.com",
                "password": "Secret123",
                "confirmPassword": "Secret123"
            })
        );
    }
}
