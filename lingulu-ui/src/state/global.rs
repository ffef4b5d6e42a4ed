//! Global Application State
//!
//! Reactive state management using Leptos signals. Page state stays in the
//! pages; only notifications are shared.

use leptos::*;

const SUCCESS_TIMEOUT_MS: u32 = 3_000;
const ERROR_TIMEOUT_MS: u32 = 5_000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(SUCCESS_TIMEOUT_MS, move || {
            success_signal.try_set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(ERROR_TIMEOUT_MS, move || {
            error_signal.try_set(None);
        })
        .forget();
    }
}
