//! Login Page
//!
//! Email and password sign-in. A successful login opens the dashboard.

use leptos::*;
use leptos_router::*;

use joina::forms::{FormController, FormKind, FormSchema, FormStatus};
use joina::shell::Session;

use crate::components::FormField;
use crate::state::{submit_form, GlobalState};

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let form = create_rw_signal(FormController::new(FormKind::Login));
    let schema = FormSchema::for_kind(FormKind::Login);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let navigate = navigate.clone();
        submit_form(form, move |accepted, status| {
            if let FormStatus::Succeeded(message) = status {
                state.sign_in(accepted.as_ref().and_then(Session::from_login), &message);
                navigate("/home", Default::default());
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 px-4">
            <div class="bg-white rounded-xl shadow-lg p-8 w-full max-w-md">
                <h2 class="text-2xl font-bold text-center text-gray-800 mb-6">{schema.title}</h2>

                <form on:submit=on_submit class="space-y-5">
                    {schema.fields.iter().map(|field| view! {
                        <FormField form=form name=field.name />
                    }).collect_view()}

                    <FormMessage form=form />

                    <button
                        type="submit"
                        disabled=move || form.with(|f| f.is_submitting())
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if form.with(|f| f.is_submitting()) { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600 mt-6">
                    <A href="/register" class="text-blue-600 hover:underline">
                        "Don't have an account? Sign up"
                    </A>
                </p>
            </div>
        </div>
    }
}

/// Success or failure message of a form's last submit
#[component]
pub fn FormMessage(form: RwSignal<FormController>) -> impl IntoView {
    move || {
        form.with(|f| match f.status() {
            FormStatus::Failed(message) => view! {
                <p class="text-sm text-red-600">{message.clone()}</p>
            }
            .into_view(),
            FormStatus::Succeeded(message) => view! {
                <p class="text-sm text-green-600">{message.clone()}</p>
            }
            .into_view(),
            FormStatus::Idle | FormStatus::Submitting => view! {}.into_view(),
        })
    }
}
