//! Backend API Access
//!
//! Thin client for the external Lingulu backend. Every response uses the
//! same envelope: `{ success, message, data }`.
//!
//! # Endpoints
//!
//! ## Account
//! - `POST /api/account/login` - Email/password login
//! - `POST /api/account/register` - Create an account
//! - `GET /api/account/oauth2/data` - Session established by the OAuth flow (cookie-authenticated)
//!
//! ## Leaderboard
//! - `GET /api/leaderboard` - Ranked rows, optional bearer token
//!
//! ## Redirect only
//! - `GET /oauth2/authorization/google` - Start of the server-driven Google OAuth flow
//!
//! # Transports
//!
//! Requests go through the [`Transport`] trait so the same client runs on
//! `reqwest` (native), on `gloo-net` (browser), or on [`MockTransport`] in
//! tests.

mod client;
mod dto;
mod error;
#[cfg(feature = "native")]
mod http;
pub mod mock;
mod transport;

pub use client::{
    ApiClient, DEFAULT_API_BASE, GOOGLE_AUTHORIZATION_PATH, LEADERBOARD_PATH, LOGIN_PATH,
    OAUTH_DATA_PATH, REGISTER_PATH,
};
pub use dto::{Envelope, LoginRequest, RegisterRequest, SessionData};
pub use error::ClientError;
#[cfg(feature = "native")]
pub use http::ReqwestTransport;
pub use mock::MockTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
