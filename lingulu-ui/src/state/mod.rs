//! State Management
//!
//! Toast state shared by every page and the local-storage session store.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
pub use storage::LocalStorageSessionStore;
