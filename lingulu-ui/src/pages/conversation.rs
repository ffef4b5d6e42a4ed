//! AI Conversation Page
//!
//! Scripted tutor chat. Replies arrive after a short timer; the speaking
//! controls only change what is shown.

use gloo_timers::callback::Timeout;
use leptos::*;

use lingulu::content::{
    Conversation as Chat, ConversationAction, Speaker, LISTEN_AGAIN_MS, TUTOR_REPLY_DELAY_MS,
};

/// `/conversation`
#[component]
pub fn Conversation() -> impl IntoView {
    let chat = create_rw_signal(Chat::new());
    let dispatch = move |action: ConversationAction| {
        chat.update(|c| *c = std::mem::take(c).reduce(action));
    };
    // Timers may fire after the page is gone
    let dispatch_later = move |delay_ms: u32, action: ConversationAction| {
        Timeout::new(delay_ms, move || {
            chat.try_update(|c| *c = std::mem::take(c).reduce(action));
        })
        .forget();
    };

    let send = move || {
        let before = chat.with_untracked(|c| c.pending_replies);
        dispatch(ConversationAction::Send);
        if chat.with_untracked(|c| c.pending_replies) > before {
            dispatch_later(TUTOR_REPLY_DELAY_MS, ConversationAction::TutorReplied);
        }
    };

    let listen_again = move |_| {
        dispatch(ConversationAction::ListenStarted);
        dispatch_later(LISTEN_AGAIN_MS, ConversationAction::ListenFinished);
    };

    view! {
        <div class="max-w-3xl mx-auto flex flex-col h-[calc(100vh-4rem)]">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-3xl font-bold">"AI Conversation"</h1>
                <button
                    class="px-4 py-2 rounded-xl border border-gray-300 text-sm"
                    on:click=listen_again
                >
                    {move || if chat.with(|c| c.listening) { "🔊 Playing..." } else { "🔁 Listen again" }}
                </button>
            </div>

            <div class="flex-1 overflow-y-auto space-y-3 bg-white rounded-2xl shadow p-6">
                <For
                    each=move || chat.with(|c| c.messages.clone())
                    key=|message| message.id
                    children=|message| {
                        let (row, bubble) = match message.speaker {
                            Speaker::Bot => ("flex justify-start", "bg-sky-100 text-gray-800"),
                            Speaker::User => ("flex justify-end", "bg-sky-600 text-white"),
                        };
                        view! {
                            <div class=row>
                                <div class=format!("max-w-[70%] rounded-2xl px-4 py-2 {}", bubble)>
                                    <p>{message.text}</p>
                                    <p class="text-xs opacity-60 mt-1">
                                        {message.timestamp.format("%H:%M").to_string()}
                                    </p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <form
                class="flex items-center space-x-3 mt-4"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    send();
                }
            >
                <button
                    type="button"
                    class=move || if chat.with(|c| c.recording) {
                        "w-12 h-12 rounded-full bg-red-500 text-white animate-pulse"
                    } else {
                        "w-12 h-12 rounded-full bg-gray-200"
                    }
                    on:click=move |_| dispatch(ConversationAction::ToggleRecording)
                >
                    "🎤"
                </button>
                <input
                    type="text"
                    placeholder="Type your message..."
                    class="flex-1 bg-white rounded-xl px-4 py-3 border border-gray-300 focus:border-sky-500 focus:outline-none"
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| dispatch(ConversationAction::InputChanged(event_target_value(&ev)))
                />
                <button type="submit" class="px-6 py-3 bg-sky-600 text-white rounded-xl font-semibold">
                    "Send"
                </button>
            </form>
        </div>
    }
}
