//! Credential validation
//!
//! Checks run before any request is made. Each field reports at most one
//! message: the first rule it fails.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub const LOGIN_PASSWORD_MIN_LEN: usize = 6;
pub const REGISTER_PASSWORD_MIN_LEN: usize = 8;
pub const USERNAME_MIN_LEN: usize = 3;

/// Form field an error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    Terms,
    /// Form-level error not tied to an input
    Submit,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Terms => "terms",
            Field::Submit => "submit",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding a single submit-level message
    pub fn submit(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(Field::Submit, message);
        errors
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Invalid email format")
    } else {
        None
    }
}

/// First failing registration password rule
fn check_strong_password(password: &str) -> Option<&'static str> {
    if password.chars().count() < REGISTER_PASSWORD_MIN_LEN {
        Some("Password must be at least 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain an uppercase letter")
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Some("Password must contain a lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain a number")
    } else {
        None
    }
}

/// Login form: email and a password of at least six characters
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(message) = check_email(email) {
        errors.insert(Field::Email, message);
    }

    if password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if password.chars().count() < LOGIN_PASSWORD_MIN_LEN {
        errors.insert(Field::Password, "Password must be at least 6 characters");
    }

    errors.into_result()
}

/// Registration form
pub fn validate_register(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    agree_to_terms: bool,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    // Length counts the raw input, blankness the trimmed one
    if username.trim().is_empty() {
        errors.insert(Field::Username, "Username is required");
    } else if username.chars().count() < USERNAME_MIN_LEN {
        errors.insert(Field::Username, "Username must be at least 3 characters");
    }

    if let Some(message) = check_email(email) {
        errors.insert(Field::Email, message);
    }

    if let Some(message) = check_strong_password(password) {
        errors.insert(Field::Password, message);
    }

    if confirm_password != password {
        errors.insert(Field::ConfirmPassword, "Passwords do not match");
    }

    if !agree_to_terms {
        errors.insert(Field::Terms, "You must agree to the terms & privacy policy");
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("ann example@x.com"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@@x.com"));
    }

    #[test]
    fn test_login_empty_email() {
        let errors = validate_login("", "secret1").unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert!(!errors.contains(Field::Password));

        let errors = validate_login("   ", "secret1").unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_login_short_password() {
        let errors = validate_login("ann@example.com", "12345").unwrap_err();
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.len(), 1);

        assert!(validate_login("ann@example.com", "123456").is_ok());
    }

    #[test]
    fn test_login_reports_both_fields() {
        let errors = validate_login("nope", "").unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Invalid email format"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_register_password_rules_in_order() {
        let check = |pw: &str| {
            validate_register("ann", "ann@example.com", pw, pw, true)
                .err()
                .and_then(|e| e.get(Field::Password).map(str::to_string))
        };

        assert_eq!(check("Ab1").as_deref(), Some("Password must be at least 8 characters"));
        assert_eq!(
            check("abcdefg1").as_deref(),
            Some("Password must contain an uppercase letter")
        );
        assert_eq!(
            check("ABCDEFG1").as_deref(),
            Some("Password must contain a lowercase letter")
        );
        assert_eq!(
            check("Abcdefgh").as_deref(),
            Some("Password must contain a number")
        );
        assert_eq!(check("Abcdefg1"), None);
    }

    #[test]
    fn test_register_other_fields() {
        let errors = validate_register("ab", "ann@example.com", "Secret123", "Secret124", false)
            .unwrap_err();
        assert_eq!(
            errors.get(Field::Username),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
        assert_eq!(
            errors.get(Field::Terms),
            Some("You must agree to the terms & privacy policy")
        );
        assert!(!errors.contains(Field::Email));
        assert!(!errors.contains(Field::Password));

        let errors = validate_register("", "", "", "", true).unwrap_err();
        assert_eq!(errors.get(Field::Username), Some("Username is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 8 characters")
        );
        assert!(!errors.contains(Field::ConfirmPassword));
    }

    #[test]
    fn test_register_valid() {
        assert!(validate_register("ann", "ann@example.com", "Secret123", "Secret123", true).is_ok());
    }

    #[test]
    fn test_field_errors_ordering() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Terms, "t");
        errors.insert(Field::Username, "u");
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Username, Field::Terms]);
    }
}
