//! Login and registration form state
//!
//! Forms are plain values; the UI dispatches actions and stores the
//! returned value. Typed fields survive every submit outcome.

use serde::Serialize;

use super::validation::{validate_login, validate_register, Field, FieldErrors};

/// What the login form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_login(&self.email, &self.password)
    }
}

/// What the registration form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl Registration {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_register(
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
            self.agree_to_terms,
        )
    }
}

/// Outcome actions shared by both forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    Started,
    ValidationFailed(FieldErrors),
    Failed(String),
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePassword,
    Submit(SubmitAction),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub submitting: bool,
    pub errors: FieldErrors,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    pub fn reduce(mut self, action: LoginAction) -> Self {
        match action {
            LoginAction::EmailChanged(email) => {
                self.email = email;
                self.errors.remove(Field::Email);
            }
            LoginAction::PasswordChanged(password) => {
                self.password = password;
                self.errors.remove(Field::Password);
            }
            LoginAction::TogglePassword => self.show_password = !self.show_password,
            LoginAction::Submit(action) => {
                apply_submit(&mut self.submitting, &mut self.errors, action)
            }
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    TermsChanged(bool),
    TogglePassword,
    ToggleConfirmPassword,
    Submit(SubmitAction),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub submitting: bool,
    pub errors: FieldErrors,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration(&self) -> Registration {
        Registration {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            agree_to_terms: self.agree_to_terms,
        }
    }

    pub fn reduce(mut self, action: RegisterAction) -> Self {
        match action {
            RegisterAction::UsernameChanged(username) => {
                self.username = username;
                self.errors.remove(Field::Username);
            }
            RegisterAction::EmailChanged(email) => {
                self.email = email;
                self.errors.remove(Field::Email);
            }
            RegisterAction::PasswordChanged(password) => {
                self.password = password;
                self.errors.remove(Field::Password);
            }
            RegisterAction::ConfirmPasswordChanged(confirm) => {
                self.confirm_password = confirm;
                self.errors.remove(Field::ConfirmPassword);
            }
            RegisterAction::TermsChanged(agreed) => {
                self.agree_to_terms = agreed;
                self.errors.remove(Field::Terms);
            }
            RegisterAction::TogglePassword => self.show_password = !self.show_password,
            RegisterAction::ToggleConfirmPassword => {
                self.show_confirm_password = !self.show_confirm_password
            }
            RegisterAction::Submit(action) => {
                apply_submit(&mut self.submitting, &mut self.errors, action)
            }
        }
        self
    }
}

fn apply_submit(submitting: &mut bool, errors: &mut FieldErrors, action: SubmitAction) {
    *submitting = matches!(action, SubmitAction::Started);
    match action {
        SubmitAction::Started => {}
        SubmitAction::ValidationFailed(field_errors) => *errors = field_errors,
        SubmitAction::Failed(message) => *errors = FieldErrors::submit(message),
        SubmitAction::Succeeded => *errors = FieldErrors::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_login() -> LoginForm {
        LoginForm::new()
            .reduce(LoginAction::EmailChanged("ann@example.com".into()))
            .reduce(LoginAction::PasswordChanged("secret1".into()))
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "Email is required");
        errors.insert(Field::Password, "Password is required");

        let form = LoginForm::new()
            .reduce(LoginAction::Submit(SubmitAction::ValidationFailed(errors)))
            .reduce(LoginAction::EmailChanged("a".into()));

        assert!(!form.errors.contains(Field::Email));
        assert_eq!(form.errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let form = filled_login()
            .reduce(LoginAction::Submit(SubmitAction::Started))
            .reduce(LoginAction::Submit(SubmitAction::Failed("bad creds".into())));

        assert!(!form.submitting);
        assert_eq!(form.errors.get(Field::Submit), Some("bad creds"));
        assert_eq!(form.errors.len(), 1);
        assert_eq!(form.email, "ann@example.com");
        assert_eq!(form.password, "secret1");
    }

    #[test]
    fn test_submit_started_and_succeeded() {
        let form = filled_login().reduce(LoginAction::Submit(SubmitAction::Started));
        assert!(form.submitting);

        let form = form.reduce(LoginAction::Submit(SubmitAction::Succeeded));
        assert!(!form.submitting);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_toggles() {
        let form = LoginForm::new().reduce(LoginAction::TogglePassword);
        assert!(form.show_password);

        let form = RegisterForm::new()
            .reduce(RegisterAction::ToggleConfirmPassword)
            .reduce(RegisterAction::TogglePassword)
            .reduce(RegisterAction::TogglePassword);
        assert!(form.show_confirm_password);
        assert!(!form.show_password);
    }

    #[test]
    fn test_register_terms_clears_error() {
        let form = RegisterForm::new();
        let errors = form.registration().validate().unwrap_err();
        assert!(errors.contains(Field::Terms));

        let form = form
            .reduce(RegisterAction::Submit(SubmitAction::ValidationFailed(errors)))
            .reduce(RegisterAction::TermsChanged(true));
        assert!(!form.errors.contains(Field::Terms));
        assert!(form.errors.contains(Field::Username));
    }

    #[test]
    fn test_credentials_from_form() {
        let credentials = filled_login().credentials();
        assert_eq!(credentials, Credentials::new("ann@example.com", "secret1"));
        assert!(credentials.validate().is_ok());
    }
}
