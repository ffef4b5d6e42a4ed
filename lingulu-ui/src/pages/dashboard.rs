//! Dashboard Page
//!
//! Greeting, current level and quick stats.

use leptos::*;
use leptos_router::*;

use lingulu::content::dashboard_summary;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let summary = dashboard_summary();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-sky-700">{summary.greeting()}</h1>
                <p class="text-gray-500 mt-1">"Ready for today's practice?"</p>
            </div>

            <section class="bg-white rounded-2xl shadow p-6">
                <h2 class="text-lg font-semibold mb-2">"Current Level"</h2>
                <p class="text-xl font-bold">{summary.current_level}</p>
                <div class="mt-4 h-3 bg-gray-200 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-sky-500 rounded-full"
                        style=format!("width: {}%", summary.level_progress)
                    />
                </div>
                <p class="text-sm text-gray-500 mt-2">{format!("{}% complete", summary.level_progress)}</p>
                <A
                    href="/lessons"
                    class="inline-block mt-4 px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white rounded-xl font-semibold"
                >
                    "Continue Learning"
                </A>
            </section>

            <div class="grid md:grid-cols-2 gap-6">
                <StatCard icon="🔥" label="Day Streak" value=summary.streak_days.to_string() />
                <StatCard icon="🏆" label="Global Rank" value=format!("#{}", summary.global_rank) />
            </div>
        </div>
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow p-6 flex items-center space-x-4">
            <span class="text-4xl">{icon}</span>
            <div>
                <p class="text-2xl font-bold">{value}</p>
                <p class="text-gray-500 text-sm">{label}</p>
            </div>
        </div>
    }
}
