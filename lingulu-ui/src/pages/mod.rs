//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod conversation;
pub mod dashboard;
pub mod exercises;
pub mod leaderboard;
pub mod lessons;
pub mod profile;

pub use auth::{Login, OAuthSuccess, Register};
pub use conversation::Conversation;
pub use dashboard::Dashboard;
pub use exercises::Exercises;
pub use leaderboard::Leaderboard;
pub use lessons::{LearningMap, Lessons, MaterialPage, Sublessons};
pub use profile::Profile;
