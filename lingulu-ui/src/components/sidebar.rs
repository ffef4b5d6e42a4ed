//! Sidebar Component
//!
//! Left-hand navigation with the logo and the main menu.

use leptos::*;
use leptos_router::*;

use lingulu::content::{MenuId, MenuItem, MENU_ITEMS};
use lingulu::routes::Route;

/// Navigation sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let current = create_memo(move |_| Route::parse(&location.pathname.get()));

    view! {
        <aside class="w-64 shrink-0 bg-white border-r border-gray-200 min-h-screen">
            <A href="/dashboard" class="flex items-center space-x-3 px-6 h-16">
                <span class="text-2xl">"🦉"</span>
                <span class="text-xl font-bold text-sky-600">"Lingulu"</span>
            </A>

            <nav class="flex flex-col px-3 space-y-1">
                {MENU_ITEMS
                    .iter()
                    .map(|item| view! { <MenuLink item=item current=current /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual menu entry
#[component]
fn MenuLink(item: &'static MenuItem, current: Memo<Route>) -> impl IntoView {
    let class = move || {
        if current.with(|route| item.is_active(route)) {
            "flex items-center space-x-3 px-4 py-3 rounded-xl bg-sky-100 text-sky-700 font-semibold"
        } else {
            "flex items-center space-x-3 px-4 py-3 rounded-xl text-gray-600 hover:bg-gray-100"
        }
    };

    view! {
        <A href=item.path class=class>
            <span class="text-lg">{menu_icon(item.id)}</span>
            <span>{item.label}</span>
        </A>
    }
}

fn menu_icon(id: MenuId) -> &'static str {
    match id {
        MenuId::Dashboard => "🏠",
        MenuId::Lessons => "📚",
        MenuId::Leaderboard => "🏆",
        MenuId::Conversation => "💬",
        MenuId::Profile => "👤",
    }
}
