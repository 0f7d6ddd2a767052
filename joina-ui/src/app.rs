//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Home, Login, Register};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Login />
                <Route path="/register" view=Register />
                <Route path="/home" view=Home />
                <Route path="/*any" view=NotFound />
            </Routes>

            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center bg-gray-100">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold text-gray-800 mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Login"
            </A>
        </div>
    }
}
