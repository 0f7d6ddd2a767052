//! Form Field Component
//!
//! Renders one field of a form from its schema entry.

use leptos::*;

use joina::forms::{FieldKind, FieldValue, FormController, Language};

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg \
                           focus:outline-none focus:ring-2 focus:ring-blue-500";

fn update(form: RwSignal<FormController>, name: &'static str, value: FieldValue) {
    form.update(|f| {
        if let Err(e) = f.set(name, value) {
            web_sys::console::error_1(&e.to_string().into());
        }
    });
}

/// Display text of a choice option
fn option_label(field: &str, value: &str) -> String {
    if field == "language" {
        if let Ok(language) = serde_json::from_value::<Language>(value.into()) {
            return language.label().to_string();
        }
    }

    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Input bound to the field `name` of `form`
#[component]
pub fn FormField(form: RwSignal<FormController>, name: &'static str) -> impl IntoView {
    let Some(spec) = form.with_untracked(|f| f.state().schema().field(name).copied()) else {
        web_sys::console::error_1(&format!("form has no field {}", name).into());
        return view! {}.into_view();
    };

    match spec.kind {
        FieldKind::Choice { options, .. } => view! {
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-2">{spec.label}</label>
                <select
                    on:change=move |ev| update(form, name, event_target_value(&ev).into())
                    prop:value=move || form.with(|f| f.state().text(name).to_string())
                    class=INPUT_CLASS
                >
                    {options.iter().map(|option| view! {
                        <option value=*option>{option_label(name, option)}</option>
                    }).collect_view()}
                </select>
            </div>
        }
        .into_view(),

        FieldKind::Toggle { .. } => view! {
            <label class="flex items-center space-x-3 cursor-pointer">
                <input
                    type="checkbox"
                    on:change=move |ev| update(form, name, event_target_checked(&ev).into())
                    prop:checked=move || form.with(|f| f.state().flag(name))
                    class="w-5 h-5 text-blue-600 rounded"
                />
                <span class="text-sm font-medium text-gray-700">{spec.label}</span>
            </label>
        }
        .into_view(),

        FieldKind::Text | FieldKind::Email | FieldKind::Password => view! {
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-2">{spec.label}</label>
                <input
                    type=spec.kind.input_type()
                    name=name
                    required=spec.required
                    prop:value=move || form.with(|f| f.state().text(name).to_string())
                    on:input=move |ev| update(form, name, event_target_value(&ev).into())
                    class=INPUT_CLASS
                />
            </div>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        assert_eq!(option_label("theme", "dark"), "Dark");
        assert_eq!(option_label("language", "es"), "Spanish");
        assert_eq!(option_label("language", "xx"), "Xx");
    }
}
