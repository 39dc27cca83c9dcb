//! Todo Models
//!
//! Application state and its derived views.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

/// Storage key of the persisted document
pub const TODOS_KEY: &str = "todos";

/// User name shown before anything was stored
pub const DEFAULT_USER_NAME: &str = "Andrzej";

/// One task; `action` is its identity within the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub action: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(action: impl Into<String>) -> Self {
        Self { action: action.into(), done: false }
    }
}

/// Whole application state with field-level reactivity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Store)]
#[serde(rename_all = "camelCase")]
pub struct TodoAppState {
    pub user_name: String,
    /// Insertion order, `action` values unique
    pub todo_items: Vec<TodoItem>,
    pub show_completed: bool,
}

impl Default for TodoAppState {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            todo_items: Vec::new(),
            show_completed: true,
        }
    }
}

impl TodoAppState {
    pub fn contains_action(&self, action: &str) -> bool {
        self.todo_items.iter().any(|item| item.action == action)
    }

    /// Items whose `done` flag equals `done`, in insertion order
    pub fn rows_for(&self, done: bool) -> Vec<TodoItem> {
        rows_for(&self.todo_items, done)
    }

    /// Number of items still to do
    pub fn pending_count(&self) -> usize {
        pending_count(&self.todo_items)
    }
}

pub fn rows_for(items: &[TodoItem], done: bool) -> Vec<TodoItem> {
    items.iter().filter(|item| item.done == done).cloned().collect()
}

pub fn pending_count(items: &[TodoItem]) -> usize {
    items.iter().filter(|item| !item.done).count()
}

/// Banner title, e.g. "Andrzej's To Do List (2 items to do)"
pub fn banner_text(user_name: &str, items: &[TodoItem]) -> String {
    format!("{}'s To Do List ({} items to do)", user_name, pending_count(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(action: &str, done: bool) -> TodoItem {
        TodoItem { action: action.to_string(), done }
    }

    #[test]
    fn test_default_state() {
        let state = TodoAppState::default();
        assert_eq!(state.user_name, "Andrzej");
        assert!(state.todo_items.is_empty());
        assert!(state.show_completed);
    }

    #[test]
    fn test_rows_for_keeps_order() {
        let state = TodoAppState {
            todo_items: vec![item("a", true), item("b", false), item("c", true), item("d", false)],
            ..Default::default()
        };

        assert_eq!(state.rows_for(false), vec![item("b", false), item("d", false)]);
        assert_eq!(state.rows_for(true), vec![item("a", true), item("c", true)]);
        assert_eq!(state.pending_count(), 2);
    }

    #[test]
    fn test_banner_text() {
        let items = vec![item("Buy milk", false), item("Walk dog", true)];
        assert_eq!(banner_text("Andrzej", &items), "Andrzej's To Do List (1 items to do)");
    }

    #[test]
    fn test_serialized_field_names() {
        let state = TodoAppState {
            todo_items: vec![item("a", false)],
            ..Default::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["userName"], "Andrzej");
        assert_eq!(json["todoItems"][0]["action"], "a");
        assert_eq!(json["showCompleted"], true);
    }
}
