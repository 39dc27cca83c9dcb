//! Labelled input emitting its raw value on every keystroke.

use leptos::prelude::*;

#[component]
pub fn InputWithLabel(
    id: &'static str,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] on_input_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        "\u{a0}"
        <input
            id=id
            type=input_type
            prop:value=move || value.get()
            on:input=move |ev| on_input_change.run(event_target_value(&ev))
        />
    }
}
