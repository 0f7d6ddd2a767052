//! Navigation Components
//!
//! Header bar and the side navigation of the dashboard shell.

use leptos::*;
use leptos_router::*;

use joina::shell::{CurrentView, APP_TITLE, NAV_ITEMS};

use crate::state::global::GlobalState;

/// Top bar with the application title and logout
#[component]
pub fn HeaderBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let session = state.session;
    let logout = move |_| {
        state.sign_out();
        navigate("/", Default::default());
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="flex items-center justify-between h-16 px-6">
                <h1 class="text-xl font-bold text-gray-800">{APP_TITLE}</h1>

                <div class="flex items-center space-x-4">
                    {move || session.get().map(|s| view! {
                        <span class="text-sm text-gray-500">{s.username}</span>
                    })}
                    <button
                        on:click=logout
                        class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Side navigation; reports the chosen view through `on_select`
#[component]
pub fn SideNav(
    #[prop(into)]
    current: Signal<CurrentView>,
    on_select: Callback<CurrentView>,
) -> impl IntoView {
    view! {
        <nav class="w-56 bg-gray-800 text-gray-300 min-h-full py-6">
            <ul class="space-y-1 px-3">
                {NAV_ITEMS.into_iter().map(|item| view! {
                    <li>
                        <button
                            on:click=move |_| on_select.call(item)
                            class=move || {
                                let base = "w-full flex items-center space-x-3 px-4 py-3 rounded-lg \
                                            text-left transition-colors";
                                if current.get() == item {
                                    format!("{} bg-gray-700 text-white", base)
                                } else {
                                    format!("{} hover:bg-gray-700 hover:text-white", base)
                                }
                            }
                        >
                            <span class="w-5 text-center">{item.icon()}</span>
                            <span>{item.label()}</span>
                        </button>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}
