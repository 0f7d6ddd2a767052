//! Register Page
//!
//! Account sign-up. Shown on its own route and as the User view of the shell.

use leptos::*;
use leptos_router::*;

use joina::forms::{FormController, FormKind, FormSchema, FormStatus};

use crate::components::FormField;
use crate::pages::login::FormMessage;
use crate::state::{submit_form, GlobalState};

/// Registration form card
#[component]
pub fn RegisterForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(FormController::new(FormKind::Register));
    let schema = FormSchema::for_kind(FormKind::Register);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        submit_form(form, move |_, status| {
            if let FormStatus::Succeeded(message) = status {
                state.show_success(&message);
            }
        });
    };

    view! {
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
                    class="w-full bg-green-600 hover:bg-green-700 disabled:bg-gray-400
                           text-white rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if form.with(|f| f.is_submitting()) { "Registering..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}

/// Stand-alone sign-up route
#[component]
pub fn Register() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-100 px-4">
            <RegisterForm />
            <p class="text-center text-sm text-gray-600 mt-6">
                <A href="/" class="text-blue-600 hover:underline">
                    "Already have an account? Log in"
                </A>
            </p>
        </div>
    }
}
