//! Lingulu Web Client
//!
//! Language-learning single-page app built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password login and registration, Google sign-in
//! - Leaderboard with current-user highlight
//! - Lesson levels, learning map, materials and speaking exercises
//! - Scripted AI conversation panel
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every flow with an external contract lives in the `lingulu`
//! crate; this crate renders it, sends requests through `gloo-net` and keeps
//! the session in `window.localStorage`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
