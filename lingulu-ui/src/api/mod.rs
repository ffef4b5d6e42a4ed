//! Backend Access
//!
//! `gloo-net` implementation of the core transport plus helpers that build
//! an [`lingulu::api::ApiClient`] for the current page.

pub mod client;

pub use client::{api_base, client, client_with_signal, GlooTransport};
