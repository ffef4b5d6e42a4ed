//! Profile Page
//!
//! Shows the stored account and logs out.

use leptos::*;
use leptos_router::*;

use lingulu::routes::{Navigation, Route};
use lingulu::session::SessionStore;

use crate::state::{GlobalState, LocalStorageSessionStore};

/// `/profile`
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user_id = LocalStorageSessionStore
        .get()
        .map(|session| session.user_id)
        .unwrap_or_else(|| "-".to_string());

    let navigate = use_navigate();
    let logout = move |_| match LocalStorageSessionStore.clear() {
        Ok(()) => {
            state.show_success("Logged out");
            navigate(&Navigation::to(Route::Login).href(), Default::default());
        }
        Err(e) => state.show_error(&format!("Could not log out: {}", e)),
    };

    view! {
        <div class="max-w-xl space-y-6">
            <h1 class="text-3xl font-bold">"Profile"</h1>

            <section class="bg-white rounded-2xl shadow p-6 space-y-2">
                <p class="text-sm text-gray-500">"User ID"</p>
                <p class="text-lg font-mono">{user_id}</p>
            </section>

            <button
                class="px-6 py-3 bg-red-500 hover:bg-red-600 text-white rounded-xl font-semibold"
                on:click=logout
            >
                "Log Out"
            </button>
        </div>
    }
}
