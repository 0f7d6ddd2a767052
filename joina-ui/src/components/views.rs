//! Chart Views
//!
//! The four statistics views. Each one fetches its own payload when mounted
//! and shows a spinner, an error box, or the chart.

use leptos::*;

use joina::fetch::{FetchState, ViewData};
use joina::stats::{
    format_count, format_usd, ExitPoints, GenderStats, GenderSummary, Spending, StatsPayload,
    VisitDuration,
};

use crate::components::chart::ChartCanvas;
use crate::components::loading::{ChartLoading, LastUpdated, LoadError};
use crate::state::fetch::use_view_state;

/// Content rendered beneath a ready chart
type Extra<P> = fn(&ViewData<P>, Callback<()>) -> View;

fn no_extra<P>(_: &ViewData<P>, _: Callback<()>) -> View {
    View::default()
}

fn chart_view<P: StatsPayload>(extra: Extra<P>) -> impl IntoView {
    let handle = use_view_state::<P>();
    let retry = handle.retry;

    view! {
        <div class="w-full">
            {move || match handle.state.get() {
                FetchState::Loading => view! {
                    <ChartLoading message=P::VIEW.loading_message() />
                }.into_view(),
                FetchState::Error(message) => view! {
                    <LoadError message=message on_retry=retry />
                }.into_view(),
                FetchState::Ready(data) => view! {
                    <div class="h-80">
                        <ChartCanvas config=data.chart() />
                    </div>
                    {extra(&data, retry)}
                    <LastUpdated at=handle.last_updated />
                }.into_view(),
            }}
        </div>
    }
}

/// Pie chart of exit points with a legend grid of counts
#[component]
pub fn ExitPointsChart() -> impl IntoView {
    chart_view::<ExitPoints>(exit_legend)
}

fn exit_legend(data: &ViewData<ExitPoints>, _: Callback<()>) -> View {
    let entries = data.series.entries(0);

    view! {
        <div class="grid grid-cols-2 gap-3 mt-6">
            {entries.into_iter().map(|entry| view! {
                <div
                    class="flex items-center justify-between rounded-lg px-3 py-2"
                    style=format!("background-color: {}20", entry.color)
                >
                    <div class="flex items-center space-x-2">
                        <span
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", entry.color)
                        />
                        <span class="text-sm text-gray-700">{entry.label}</span>
                    </div>
                    <span class="text-sm font-semibold text-gray-800">
                        {format_count(entry.value)}
                    </span>
                </div>
            }).collect_view()}
        </div>
    }
    .into_view()
}

#[component]
pub fn VisitDurationChart() -> impl IntoView {
    chart_view::<VisitDuration>(no_extra)
}

/// Grouped bar chart of counts and salaries, with summary cards
#[component]
pub fn GenderStatsChart() -> impl IntoView {
    chart_view::<GenderStats>(gender_summary)
}

fn gender_summary(data: &ViewData<GenderStats>, refresh: Callback<()>) -> View {
    let summary = GenderSummary::from_stats(&data.payload);

    view! {
        <div class="flex justify-end mt-4">
            <button
                on:click=move |_| refresh.call(())
                class="px-3 py-1 bg-blue-500 hover:bg-blue-600 text-white rounded
                       text-sm transition-colors"
            >
                "Refresh"
            </button>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-4">
            <div class="bg-blue-50 rounded-lg p-4">
                <h3 class="font-semibold text-gray-800 mb-2">"Gender Distribution"</h3>
                <SummaryRow label="Male" value=format_count(summary.male) />
                <SummaryRow label="Female" value=format_count(summary.female) />
                <SummaryRow label="Total" value=format_count(summary.total) />
            </div>
            <div class="bg-pink-50 rounded-lg p-4">
                <h3 class="font-semibold text-gray-800 mb-2">"Salary Comparison"</h3>
                <SummaryRow label="Male" value=format_usd(summary.male_salary) />
                <SummaryRow label="Female" value=format_usd(summary.female_salary) />
                <SummaryRow label="Difference" value=format_usd(summary.salary_gap) />
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn SummaryRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between text-sm py-1">
            <span class="text-gray-600">{label}</span>
            <span class="font-medium text-gray-800">{value}</span>
        </div>
    }
}

#[component]
pub fn SpendingChart() -> impl IntoView {
    chart_view::<Spending>(no_extra)
}
