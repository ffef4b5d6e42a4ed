//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use lingulu::routes::Route as AppRoute;
use lingulu::session::SessionStore;

use crate::components::{Sidebar, Toast};
use crate::pages::{
    Conversation, Dashboard, Exercises, Leaderboard, LearningMap, Lessons, Login, MaterialPage,
    OAuthSuccess, Profile, Register, Sublessons,
};
use crate::state::{provide_global_state, LocalStorageSessionStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-sky-50 text-gray-900">
                <Routes>
                    <Route path="/" view=Login />
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />
                    <Route path="/oauth2/success" view=OAuthSuccess />

                    <Route path="" view=AppShell>
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/lessons" view=Lessons />
                        <Route path="/lessons/map" view=LearningMap />
                        <Route path="/lessons/:level_id" view=Sublessons />
                        <Route path="/lessons/:level_id/materials/:material_id" view=MaterialPage />
                        <Route path="/lessons/:level_id/exercises" view=Exercises />
                        <Route path="/leaderboard" view=Leaderboard />
                        <Route path="/conversation" view=Conversation />
                        <Route path="/profile" view=Profile />
                    </Route>

                    <Route path="/*any" view=NotFound />
                </Routes>

                <Toast />
            </div>
        </Router>
    }
}

/// Sidebar layout for signed-in pages; sends visitors without a token to
/// the login page
#[component]
fn AppShell() -> impl IntoView {
    let location = use_location();
    let redirect = create_memo(move |_| {
        AppRoute::parse(&location.pathname.get())
            .gate(LocalStorageSessionStore.has_session())
            .map(|navigation| navigation.href())
    });

    view! {
        <Show
            when=move || redirect.with(Option::is_none)
            fallback=move || view! { <Redirect path=redirect.get().unwrap_or_default() /> }
        >
            <div class="flex">
                <Sidebar />
                <main class="flex-1 px-8 py-8">
                    <Outlet />
                </main>
            </div>
        </Show>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">
                {move || format!("Nothing lives at {}", location.pathname.get())}
            </p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
