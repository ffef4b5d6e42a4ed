//! Exercises Page
//!
//! Ten speaking questions; the microphone only toggles a listening state.

use leptos::*;
use leptos_router::*;

use lingulu::content::{ExerciseAction, ExerciseSession};

/// `/lessons/:level_id/exercises`
#[component]
pub fn Exercises() -> impl IntoView {
    let params = use_params_map();
    let session = create_rw_signal(ExerciseSession::new());
    let dispatch = move |action: ExerciseAction| {
        session.update(|s| *s = s.clone().reduce(action));
    };
    let back_href = move || {
        params.with(|p| format!("/lessons/{}", p.get("level_id").cloned().unwrap_or_default()))
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <div class="flex items-center space-x-4">
                <A href=back_href class="text-2xl text-gray-500">"✕"</A>
                <div class="flex-1 h-3 bg-gray-200 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-sky-500 rounded-full transition-all"
                        style=move || format!("width: {:.0}%", session.with(|s| s.progress_percent()))
                    />
                </div>
                <span class="text-sm text-gray-500">
                    {move || session.with(|s| format!("{}/{}", s.current, s.total))}
                </span>
            </div>

            <section class="bg-white rounded-2xl shadow p-8 text-center space-y-6">
                <p class="text-sm uppercase tracking-wide text-gray-400">"Speak your answer"</p>
                <h1 class="text-2xl font-bold">{move || session.with(|s| s.question_text())}</h1>

                <button
                    class=move || if session.with(|s| s.listening) {
                        "w-24 h-24 rounded-full bg-red-500 text-white text-4xl animate-pulse"
                    } else {
                        "w-24 h-24 rounded-full bg-sky-600 text-white text-4xl"
                    }
                    on:click=move |_| dispatch(ExerciseAction::ToggleMicrophone)
                >
                    "🎤"
                </button>
                <p class="text-gray-500">
                    {move || if session.with(|s| s.listening) { "Listening..." } else { "Tap to speak" }}
                </p>
            </section>

            <div class="flex justify-between">
                <button
                    class="px-6 py-3 rounded-xl border border-gray-300 font-semibold disabled:opacity-40"
                    disabled=move || session.with(|s| s.is_first())
                    on:click=move |_| dispatch(ExerciseAction::Back)
                >
                    "Back"
                </button>
                <button
                    class="px-6 py-3 rounded-xl bg-sky-600 text-white font-semibold disabled:opacity-40"
                    disabled=move || session.with(|s| s.is_last())
                    on:click=move |_| dispatch(ExerciseAction::Next)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
