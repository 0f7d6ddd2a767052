//! Settings Page
//!
//! Dashboard preferences saved to local storage, and the API base URL.

use leptos::*;

use joina::forms::{FormController, FormKind, FormSchema, FormStatus, Settings as SavedSettings};

use crate::api;
use crate::components::FormField;
use crate::pages::login::FormMessage;
use crate::state::{submit_form, GlobalState};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8 max-w-2xl">
            <PreferenceSettings />
            <ApiSettings />
        </div>
    }
}

/// Settings form seeded from the last saved values
fn seeded_form(saved: &SavedSettings) -> FormController {
    let mut controller = FormController::new(FormKind::Settings);
    let values = saved.to_state();

    for field in values.schema().fields {
        if let Some(value) = values.get(field.name) {
            if let Err(e) = controller.set(field.name, value.clone()) {
                web_sys::console::error_1(&e.to_string().into());
            }
        }
    }

    controller
}

#[component]
fn PreferenceSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(seeded_form(&state.settings.get_untracked()));
    let schema = FormSchema::for_kind(FormKind::Settings);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        submit_form(form, move |_, status| match status {
            FormStatus::Succeeded(message) => {
                match form.with_untracked(|f| SavedSettings::from_state(f.state())) {
                    Ok(settings) => state.settings.set(settings),
                    Err(e) => web_sys::console::error_1(&e.to_string().into()),
                }
                state.show_success(&message);
            }
            FormStatus::Failed(message) => state.show_error(&message),
            FormStatus::Idle | FormStatus::Submitting => {}
        });
    };

    view! {
        <section class="bg-white rounded-xl shadow-lg p-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-6">{schema.title}</h2>

            <form on:submit=on_submit class="space-y-5">
                {schema.fields.iter().map(|field| view! {
                    <FormField form=form name=field.name />
                }).collect_view()}

                <FormMessage form=form />

                <div class="flex justify-end space-x-3 pt-2">
                    <button
                        type="button"
                        on:click=move |_| form.update(|f| f.reset())
                        class="px-5 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800
                               rounded-lg font-medium transition-colors"
                    >
                        "Reset"
                    </button>
                    <button
                        type="submit"
                        disabled=move || form.with(|f| f.is_submitting())
                        class="px-5 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        state.show_success("API URL saved");
    };

    let reset_url = move |_| {
        api::set_api_base(api::DEFAULT_API_BASE);
        set_api_url.set(api::get_api_base());
    };

    view! {
        <section class="bg-white rounded-xl shadow-lg p-6">
            <h2 class="text-xl font-semibold text-gray-800 mb-4">"API Connection"</h2>

            <label class="block text-sm font-medium text-gray-700 mb-2">"Joina API URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 px-4 py-3 border border-gray-300 rounded-lg
                           focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
                <button
                    on:click=reset_url
                    class="px-4 py-3 bg-gray-200 hover:bg-gray-300 rounded-lg font-medium transition-colors"
                >
                    "Default"
                </button>
                <button
                    on:click=save_url
                    class="px-4 py-3 bg-blue-600 hover:bg-blue-700 text-white
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
            <p class="text-xs text-gray-400 mt-2">
                "Charts load from this address the next time they are opened."
            </p>
        </section>
    }
}
