//! Banner with the user name and the number of pending tasks.

use leptos::prelude::*;

use crate::models::{banner_text, TodoItem};

#[component]
pub fn TodoBanner(
    #[prop(into)] name: Signal<String>,
    #[prop(into)] tasks: Signal<Vec<TodoItem>>,
) -> impl IntoView {
    view! {
        <h4 class="bg-primary text-white text-center p-2">
            {move || tasks.with(|tasks| banner_text(&name.get(), tasks))}
        </h4>
    }
}
