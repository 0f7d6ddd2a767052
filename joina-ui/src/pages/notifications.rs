use leptos::*;

use joina::shell::NO_NOTIFICATIONS;

#[component]
pub fn Notifications() -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-lg p-6 max-w-2xl">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">"Notifications"</h2>
            <p class="text-gray-600">{NO_NOTIFICATIONS}</p>
        </section>
    }
}
