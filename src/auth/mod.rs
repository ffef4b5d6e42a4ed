//! Session Acquisition
//!
//! Everything that ends with a stored [`Session`](crate::session::Session):
//!
//! - [`validation`]: local credential rules and [`FieldErrors`]
//! - [`form`]: login / register form values and their reducers
//! - [`flow`]: `submit_login` / `submit_register`
//! - [`oauth`]: the `/oauth2/success` redirect handler

pub mod flow;
pub mod form;
pub mod oauth;
pub mod validation;

pub use flow::{
    submit_login, submit_register, Authenticated, SubmitError, LOGIN_FAILED_MESSAGE,
    REGISTRATION_FAILED_MESSAGE, UNREACHABLE_MESSAGE,
};
pub use form::{
    Credentials, LoginAction, LoginForm, RegisterAction, RegisterForm, Registration, SubmitAction,
};
pub use oauth::{complete_oauth, OAuthFailure, ERROR_QUERY_KEY};
pub use validation::{validate_login, validate_register, Field, FieldErrors};
