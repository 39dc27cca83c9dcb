//! Table of todo rows.

use leptos::prelude::*;

use super::TodoRow;
use crate::models::TodoItem;

#[component]
pub fn TodoTable(
    #[prop(into)] rows: Signal<Vec<TodoItem>>,
    #[prop(into)] on_toggle: Callback<TodoItem>,
) -> impl IntoView {
    view! {
        <table class="table table-striped table-bordered">
            <thead>
                <tr><th>"Description"</th><th>"Done"</th></tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|item| item.action.clone()
                    children=move |item| view! { <TodoRow item=item callback=on_toggle /> }
                />
            </tbody>
        </table>
    }
}
