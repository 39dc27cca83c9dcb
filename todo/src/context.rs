//! Todo Context
//!
//! Reactive state plus the persisted store, captured by value in `App`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{rows_for, TodoAppState, TodoAppStateStoreFields, TodoItem};
use crate::store::{TodoCommand, TodoStore};

/// The only path through which components change state
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Field-level reactive copy of the store's state
    pub state: Store<TodoAppState>,
    backend: StoredValue<TodoStore>,
}

impl TodoContext {
    pub fn new(backend: TodoStore) -> Self {
        Self {
            state: Store::new(backend.state().clone()),
            backend: StoredValue::new(backend),
        }
    }

    /// Run `command` through the store and publish the new state
    pub fn dispatch(&self, command: TodoCommand) {
        match self.backend.try_update_value(|store| store.dispatch(command)) {
            Some(Ok(true)) => {}
            Some(Ok(false)) | None => return,
            Some(Err(e)) => log::error!("Failed to persist todos: {}", e),
        }
        let next = self.backend.with_value(|store| store.state().clone());
        self.state.set(next);
    }

    /// Reactive rows for the pending (`false`) or completed (`true`) table
    pub fn rows_for(&self, done: bool) -> Vec<TodoItem> {
        self.state.todo_items().with(|items| rows_for(items, done))
    }
}
