//! Dashboard Page
//!
//! Grid of the four chart views.

use leptos::*;

use joina::shell::DASHBOARD_TITLE;
use joina::stats::ChartView;

use crate::components::{ExitPointsChart, GenderStatsChart, SpendingChart, VisitDurationChart};

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-800">{DASHBOARD_TITLE}</h1>
                <p class="text-gray-500 mt-1">"Overview of key metrics and performance indicators"</p>
            </div>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                {ChartView::ALL.into_iter().map(|view| view! {
                    <ChartCard view=view />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Card holding one chart view under its section heading
#[component]
fn ChartCard(view: ChartView) -> impl IntoView {
    let chart = match view {
        ChartView::Spending => view! { <SpendingChart /> }.into_view(),
        ChartView::GenderStats => view! { <GenderStatsChart /> }.into_view(),
        ChartView::ExitPoints => view! { <ExitPointsChart /> }.into_view(),
        ChartView::VisitDuration => view! { <VisitDurationChart /> }.into_view(),
    };

    view! {
        <section class="bg-white rounded-xl shadow-lg p-6">
            <p class="text-xs font-semibold uppercase tracking-wide text-gray-400">{view.section()}</p>
            <h2 class="text-lg font-bold text-gray-800 mb-4">{view.title()}</h2>
            {chart}
        </section>
    }
}
