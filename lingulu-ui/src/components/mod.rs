//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod field_error;
pub mod loading;
pub mod sidebar;
pub mod toast;

pub use field_error::FieldError;
pub use loading::{InlineLoading, ListSkeleton, Loading};
pub use sidebar::Sidebar;
pub use toast::Toast;
