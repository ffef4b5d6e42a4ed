//! Leaderboard Page
//!
//! Loads once on mount. Leaving the page aborts the request, and a
//! cancelled load never touches the page state.

use leptos::*;

use lingulu::leaderboard::{self, LeaderboardAction, LeaderboardEntry, LeaderboardState, Podium};

use crate::api;
use crate::components::ListSkeleton;
use crate::state::LocalStorageSessionStore;

/// `/leaderboard`
#[component]
pub fn Leaderboard() -> impl IntoView {
    let board = create_rw_signal(LeaderboardState::new());
    let dispatch = move |action: LeaderboardAction| {
        board.update(|b| *b = std::mem::take(b).reduce(action));
    };

    dispatch(LeaderboardAction::Started);

    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let (load, handle) = leaderboard::cancellable(async move {
        let client = match signal {
            Some(signal) => api::client_with_signal(signal),
            None => api::client(),
        };
        leaderboard::load(&client, &LocalStorageSessionStore).await
    });

    spawn_local(async move {
        match load.await {
            Ok(rows) => dispatch(LeaderboardAction::Loaded(rows)),
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load leaderboard: {}", e).into());
                dispatch(LeaderboardAction::Failed(e.to_string()));
            }
        }
    });

    on_cleanup(move || {
        handle.abort();
        if let Some(controller) = controller {
            controller.abort();
        }
    });

    view! {
        <div class="max-w-3xl mx-auto space-y-6 pb-24">
            <h1 class="text-3xl font-bold">"Leaderboard"</h1>

            {move || board.with(|b| b.error.clone()).map(|err| view! {
                <div class="bg-red-50 border border-red-200 text-red-700 rounded-xl px-4 py-3 text-sm">
                    {err}
                </div>
            })}

            {move || {
                board.with(|b| {
                    if b.loading && b.entries.is_empty() {
                        view! { <ListSkeleton /> }.into_view()
                    } else if b.is_empty_view() {
                        view! {
                            <p class="text-center text-gray-500 py-12">"No leaderboard data available"</p>
                        }.into_view()
                    } else {
                        b.entries
                            .iter()
                            .map(|entry| {
                                let highlight = b.is_current_user(entry);
                                view! { <EntryRow entry=entry.clone() highlight=highlight /> }
                            })
                            .collect_view()
                    }
                })
            }}

            {move || {
                board.with(|b| {
                    b.current_user
                        .as_ref()
                        .filter(|_| b.shows_rank_banner())
                        .map(|me| view! {
                            <div class="fixed bottom-0 left-64 right-0 bg-sky-600 text-white px-8 py-4
                                        flex items-center justify-between shadow-lg">
                                <span class="font-bold">{format!("#{}", me.rank)}</span>
                                <span>{me.name.clone()}</span>
                                <span class="font-semibold">{format!("{} XP", me.xp)}</span>
                            </div>
                        })
                })
            }}
        </div>
    }
}

#[component]
fn EntryRow(entry: LeaderboardEntry, highlight: bool) -> impl IntoView {
    let tier = match entry.podium() {
        Some(Podium::Gold) => "bg-yellow-100 border-yellow-400",
        Some(Podium::Silver) => "bg-gray-100 border-gray-400",
        Some(Podium::Bronze) => "bg-orange-100 border-orange-400",
        None => "bg-white border-transparent",
    };
    let ring = if highlight { " ring-2 ring-sky-500" } else { "" };
    let initial = entry.name.chars().next().unwrap_or('?').to_string();

    view! {
        <div class=format!("flex items-center space-x-4 rounded-2xl border-2 px-6 py-3 {}{}", tier, ring)>
            <span class="w-8 text-lg font-bold text-gray-600">{entry.rank}</span>
            {match entry.avatar_url {
                Some(url) => view! {
                    <img src=url alt=entry.name.clone() class="w-10 h-10 rounded-full object-cover" />
                }.into_view(),
                None => view! {
                    <span class="w-10 h-10 rounded-full bg-sky-200 flex items-center justify-center font-bold">
                        {initial}
                    </span>
                }.into_view(),
            }}
            <span class="flex-1 font-semibold">
                {entry.name.clone()}
                {highlight.then(|| view! { <span class="ml-2 text-xs text-sky-600">"(You)"</span> })}
            </span>
            <span class="font-bold text-sky-700">{format!("{} XP", entry.xp)}</span>
        </div>
    }
}
