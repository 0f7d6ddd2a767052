//! Home Page
//!
//! The signed-in shell: header, side navigation and the selected view.

use leptos::*;

use joina::forms::Theme;
use joina::shell::CurrentView;

use crate::components::{HeaderBar, SideNav};
use crate::pages::{Dashboard, Notifications, RegisterForm, Settings};
use crate::state::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let current = create_rw_signal(CurrentView::default());
    let on_select = Callback::new(move |view: CurrentView| current.set(view));

    let settings = state.settings;
    let theme_class = move || match settings.get().theme {
        Theme::Dark => "min-h-screen flex flex-col bg-gray-900",
        Theme::Light => "min-h-screen flex flex-col bg-gray-100",
    };

    view! {
        <div class=theme_class>
            <HeaderBar />

            <div class="flex flex-1">
                <SideNav current=current on_select=on_select />

                <main class="flex-1 p-8">
                    {move || match current.get() {
                        CurrentView::Dashboard => view! { <Dashboard /> }.into_view(),
                        CurrentView::User => view! { <RegisterForm /> }.into_view(),
                        CurrentView::Notifications => view! { <Notifications /> }.into_view(),
                        CurrentView::Settings => view! { <Settings /> }.into_view(),
                    }}
                </main>
            </div>
        </div>
    }
}
