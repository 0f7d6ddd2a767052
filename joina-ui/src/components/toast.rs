//! Toast Component
//!
//! Shows the current [`Notice`] in the corner of the screen.

use leptos::*;

use crate::state::global::{GlobalState, Notice};

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50">
            {move || state.notice.get().map(|notice| view! { <NoticeCard notice=notice /> })}
        </div>
    }
}

#[component]
fn NoticeCard(notice: Notice) -> impl IntoView {
    let (icon, tone) = match &notice {
        Notice::Success(_) => ("✓", "bg-green-600"),
        Notice::Error(_) => ("⚠", "bg-red-600"),
    };
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            role="status"
            class=format!("flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg", tone)
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.text().to_string()}</span>
            <button
                on:click=move |_| state.notice.set(None)
                class="text-white/70 hover:text-white text-sm"
            >
                "×"
            </button>
        </div>
    }
}
