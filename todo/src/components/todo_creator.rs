//! Todo Creator Component
//!
//! Text entry for new tasks. The draft is local until submitted.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Emits the raw entered text; empty drafts are not submitted
#[component]
pub fn TodoCreator(#[prop(into)] callback: Callback<String>) -> impl IntoView {
    let (new_item_text, set_new_item_text) = signal(String::new());

    let create_new_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = new_item_text.get();
        if text.is_empty() { return; }
        callback.run(text);
        set_new_item_text.set(String::new());
    };

    view! {
        <form class="my-1" on:submit=create_new_todo>
            <input
                class="form-control"
                placeholder="New task..."
                prop:value=move || new_item_text.get()
                on:input=move |ev| set_new_item_text.set(event_target_value(&ev))
            />
            <button class="btn btn-primary mt-1" type="submit">"Add"</button>
        </form>
    }
}
