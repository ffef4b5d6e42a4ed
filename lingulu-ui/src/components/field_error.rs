//! Inline form error

use leptos::*;

/// Red helper text under an input; renders nothing without a message
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|msg| view! { <p class="mt-1 text-sm text-red-500">{msg}</p> })
    }
}
