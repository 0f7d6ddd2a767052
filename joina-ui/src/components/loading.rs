//! Loading Component
//!
//! Spinner and error states of a chart view.

use chrono::{DateTime, Utc};
use leptos::*;

/// Spinner with a message, shown while a view's data is in flight
#[component]
pub fn ChartLoading(message: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-80">
            <div class="loading-spinner w-12 h-12 mb-4" />
            <p class="text-gray-600 font-medium">{message}</p>
        </div>
    }
}

/// Error box with a retry button
#[component]
pub fn LoadError(
    #[prop(into)]
    message: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-80">
            <div class="bg-red-50 border border-red-200 rounded-lg p-6 max-w-md text-center">
                <div class="text-red-600 text-3xl mb-2">"⚠"</div>
                <p class="text-red-700 font-medium mb-4">{message}</p>
                <button
                    on:click=move |_| on_retry.call(())
                    class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "Try Again"
                </button>
            </div>
        </div>
    }
}

/// Time of the last successful load
#[component]
pub fn LastUpdated(at: ReadSignal<Option<DateTime<Utc>>>) -> impl IntoView {
    view! {
        <p class="text-xs text-gray-400 text-right mt-4">
            {move || {
                at.get()
                    .map(|dt| format!("Updated {}", dt.format("%H:%M:%S")))
                    .unwrap_or_default()
            }}
        </p>
    }
}
