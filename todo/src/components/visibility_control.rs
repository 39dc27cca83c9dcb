//! Visibility Control Component
//!
//! Checkbox mirroring an externally owned flag.

use leptos::prelude::*;

#[component]
pub fn VisibilityControl(
    #[prop(into)] description: String,
    #[prop(into)] is_checked: Signal<bool>,
    #[prop(into)] callback: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form-check">
            <input
                class="form-check-input"
                type="checkbox"
                prop:checked=move || is_checked.get()
                on:change=move |ev| callback.run(event_target_checked(&ev))
            />
            <label class="form-check-label">"Show " {description}</label>
        </div>
    }
}
