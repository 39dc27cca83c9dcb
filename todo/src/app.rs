//! Todo Frontend App
//!
//! Banner, creator, pending table, visibility toggle, completed table.

use std::sync::Arc;

use leptos::prelude::*;
use storage_state::BrowserStorage;

use crate::components::{TodoBanner, TodoCreator, TodoTable, VisibilityControl};
use crate::context::TodoContext;
use crate::models::{TodoAppStateStoreFields, TodoItem};
use crate::store::{TodoCommand, TodoStore};

#[component]
pub fn App() -> impl IntoView {
    // Restore once on mount
    let ctx = TodoContext::new(TodoStore::load(Arc::new(BrowserStorage::new())));

    let name = Signal::derive(move || ctx.state.user_name().get());
    let tasks = Signal::derive(move || ctx.state.todo_items().get());
    let show_completed = Signal::derive(move || ctx.state.show_completed().get());
    let pending = Signal::derive(move || ctx.rows_for(false));
    let completed = Signal::derive(move || ctx.rows_for(true));

    let toggle = move |item: TodoItem| ctx.dispatch(TodoCommand::toggle(&item));

    view! {
        <div>
            <TodoBanner name=name tasks=tasks />
            <div class="container-fluid">
                <TodoCreator callback=move |text: String| ctx.dispatch(TodoCommand::CreateTodo(text)) />
                <TodoTable rows=pending on_toggle=toggle />
                <div class="bg-secondary text-white text-center p-2">
                    <VisibilityControl
                        description="Completed Tasks"
                        is_checked=show_completed
                        callback=move |checked: bool| ctx.dispatch(TodoCommand::SetVisibility(checked))
                    />
                </div>
                <Show when=move || show_completed.get()>
                    <TodoTable rows=completed on_toggle=toggle />
                </Show>
            </div>
        </div>
    }
}
