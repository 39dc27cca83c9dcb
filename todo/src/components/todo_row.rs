//! Todo Row Component
//!
//! One task: description and a done checkbox.

use leptos::prelude::*;

use crate::models::TodoItem;

/// A single row; toggling hands the whole item to `callback`
#[component]
pub fn TodoRow(
    item: TodoItem,
    #[prop(into)] callback: Callback<TodoItem>,
) -> impl IntoView {
    let action = item.action.clone();
    let done = item.done;

    view! {
        <tr>
            <td>{action}</td>
            <td>
                <input
                    type="checkbox"
                    prop:checked=done
                    on:change=move |_| callback.run(item.clone())
                />
            </td>
        </tr>
    }
}
