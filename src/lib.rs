//! # Lingulu
//!
//! Client core for the Lingulu language-learning app: the parts of the
//! single-page client that have an external contract, written as plain
//! Rust so the browser app and the command line share them.
//!
//! ## Features
//!
//! - **Session acquisition**: validated login/registration and the OAuth
//!   redirect handler, persisting the token pair through a [`SessionStore`]
//! - **Leaderboard**: cancellable fetch and normalization of a loosely
//!   shaped payload into ranked rows
//! - **Routing**: typed routes, session gating and [`Navigation`] values
//! - **Content**: mock lessons, exercises and the scripted AI conversation
//!
//! ## Modules
//!
//! - [`api`]: envelope types, transport seam and the backend client
//! - [`auth`]: validation, form reducers, credential and OAuth flows
//! - [`leaderboard`]: normalization, view state and loading
//! - [`routes`]: route table and navigation values
//! - [`session`]: session store trait and implementations
//! - [`content`]: static page content
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lingulu::api::{ApiClient, ReqwestTransport};
//! use lingulu::auth::{submit_login, Credentials};
//! use lingulu::session::MemorySessionStore;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new(std::time::Duration::from_secs(30))?;
//!     let client = ApiClient::new(transport, "http://localhost:8080");
//!     let store = MemorySessionStore::new();
//!
//!     let auth = submit_login(&client, &store, &Credentials::new("ann@example.com", "secret1")).await?;
//!     println!("Logged in as {}, next: {}", auth.session.user_id, auth.navigation);
//!
//!     let board = lingulu::leaderboard::load(&client, &store).await?;
//!     for entry in &board.entries {
//!         println!("{:>3}. {} ({} XP)", entry.rank, entry.name, entry.xp);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
#[cfg(feature = "native")]
pub mod config;
pub mod content;
pub mod leaderboard;
#[cfg(feature = "native")]
pub mod logging;
pub mod routes;
pub mod session;

// Re-export top-level types for convenience
pub use api::{ApiClient, ClientError, Envelope, HttpRequest, HttpResponse, Transport};

pub use auth::{
    complete_oauth, submit_login, submit_register, Authenticated, Credentials, Field, FieldErrors,
    OAuthFailure, Registration, SubmitError,
};

pub use leaderboard::{
    CurrentUserInfo, Leaderboard, LeaderboardEntry, LeaderboardState, LoadError, LoadHandle,
};

pub use routes::{Navigation, Route};

pub use session::{MemorySessionStore, Session, SessionStore, SessionStoreError};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
