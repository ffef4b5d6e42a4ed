//! Lesson Pages
//!
//! Level overview, learning map, the sublessons of a level and reading
//! materials.

use leptos::*;
use leptos_router::*;

use lingulu::content::{learning_map, levels, material, sublessons, LessonStatus, SublessonKind};

/// `/lessons`
#[component]
pub fn Lessons() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Choose Your Level"</h1>
            <div class="grid md:grid-cols-3 gap-6">
                {levels()
                    .into_iter()
                    .map(|level| {
                        let target = level.start_route();
                        let navigate = navigate.clone();
                        view! {
                            <div class=if level.locked {
                                "bg-gray-100 rounded-2xl p-6 opacity-70"
                            } else {
                                "bg-white rounded-2xl shadow p-6"
                            }>
                                <h2 class="text-xl font-bold">{level.title}</h2>
                                <p class="text-gray-500 mt-2">{level.description}</p>
                                {level.progress.map(|p| view! {
                                    <p class="text-sm text-sky-600 mt-2">{format!("{}% complete", p)}</p>
                                })}
                                {level.lock_message.map(|msg| view! {
                                    <p class="text-sm text-gray-400 mt-2">"🔒 " {msg}</p>
                                })}
                                <button
                                    class="mt-4 w-full py-2 rounded-xl font-semibold bg-sky-600 text-white
                                           disabled:bg-gray-300 disabled:text-gray-500"
                                    disabled=level.locked
                                    on:click=move |_| {
                                        if let Some(route) = &target {
                                            navigate(&route.path(), Default::default());
                                        }
                                    }
                                >
                                    {level.button_text()}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// `/lessons/map`
#[component]
pub fn LearningMap() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Learning Map"</h1>
            <ol class="space-y-4">
                {learning_map()
                    .into_iter()
                    .map(|lesson| {
                        let target = lesson.route(&lesson.id.to_string());
                        let locked = lesson.status.is_locked();
                        let navigate = navigate.clone();
                        view! {
                            <li>
                                <button
                                    class=format!(
                                        "w-full flex items-center justify-between bg-white rounded-2xl shadow px-6 py-4 lesson-{}",
                                        lesson.status.as_str()
                                    )
                                    disabled=locked
                                    on:click=move |_| {
                                        if let Some(route) = &target {
                                            navigate(&route.path(), Default::default());
                                        }
                                    }
                                >
                                    <div class="text-left">
                                        <p class="font-bold">{lesson.title}</p>
                                        <p class="text-sm text-gray-500">{lesson.description}</p>
                                    </div>
                                    <span class="text-2xl">{status_icon(lesson.status)}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

fn status_icon(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Completed => "✅",
        LessonStatus::InProgress => "▶️",
        LessonStatus::Locked => "🔒",
    }
}

/// `/lessons/:level_id`
#[component]
pub fn Sublessons() -> impl IntoView {
    let params = use_params_map();
    let level_id = move || params.with(|p| p.get("level_id").cloned().unwrap_or_default());

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{move || format!("Level {}", level_id())}</h1>
            <div class="space-y-4">
                {move || {
                    let level_id = level_id();
                    sublessons()
                        .into_iter()
                        .map(|sub| {
                            let href = sub.route(&level_id).path();
                            let icon = match sub.kind {
                                SublessonKind::Material => "📖",
                                SublessonKind::Exercise => "🎤",
                            };
                            view! {
                                <div class="flex items-center justify-between bg-white rounded-2xl shadow px-6 py-4">
                                    <div class="flex items-center space-x-3">
                                        <span class="text-2xl">{icon}</span>
                                        <span class="font-semibold">{sub.title}</span>
                                    </div>
                                    <A href=href class="px-4 py-2 bg-sky-600 text-white rounded-xl font-semibold">
                                        "Start"
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// `/lessons/:level_id/materials/:material_id`
#[component]
pub fn MaterialPage() -> impl IntoView {
    let params = use_params_map();
    let found = move || params.with(|p| p.get("material_id").and_then(|id| material(id)));
    let back = move || {
        params.with(|p| format!("/lessons/{}", p.get("level_id").cloned().unwrap_or_default()))
    };

    view! {
        <div class="space-y-6">
            {move || match found() {
                Some(m) => view! {
                    <article class="bg-white rounded-2xl shadow p-8">
                        <h1 class="text-2xl font-bold mb-4">{m.title}</h1>
                        <p class="text-gray-700 leading-relaxed">{m.content}</p>
                    </article>
                }.into_view(),
                None => view! {
                    <div class="bg-white rounded-2xl shadow p-8 text-center">
                        <h1 class="text-2xl font-bold mb-2">"Material not found"</h1>
                        <p class="text-gray-500">"This material does not exist or has been moved."</p>
                    </div>
                }.into_view(),
            }}
            <A href=back class="text-sky-600 font-semibold">"← Back to lessons"</A>
        </div>
    }
}
