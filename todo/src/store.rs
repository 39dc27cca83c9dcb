//! Todo Store
//!
//! Commands, the pure reducer, and the persisted store that applies them.

use storage_state::{PersistentValue, SharedStore, StorageResult};

use crate::document::TodoDocumentCodec;
use crate::models::{TodoAppState, TodoItem, TODOS_KEY};

/// Every state transition the UI can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// Append a task unless one with the same text exists
    CreateTodo(String),
    /// Flip `done` of the task with this `action`
    ToggleTodo(String),
    /// Show or hide the completed table
    SetVisibility(bool),
}

impl TodoCommand {
    pub fn toggle(item: &TodoItem) -> Self {
        TodoCommand::ToggleTodo(item.action.clone())
    }
}

/// Next state for `command`; unknown or duplicate targets leave it unchanged
pub fn reduce(state: &TodoAppState, command: &TodoCommand) -> TodoAppState {
    match command {
        TodoCommand::CreateTodo(text) => {
            if state.contains_action(text) {
                return state.clone();
            }
            let mut next = state.clone();
            next.todo_items.push(TodoItem::new(text.as_str()));
            next
        }
        TodoCommand::ToggleTodo(action) => TodoAppState {
            todo_items: state
                .todo_items
                .iter()
                .map(|item| {
                    if item.action == *action {
                        TodoItem { done: !item.done, ..item.clone() }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
            ..state.clone()
        },
        TodoCommand::SetVisibility(flag) => TodoAppState {
            show_completed: *flag,
            ..state.clone()
        },
    }
}

/// Application state bound to the `"todos"` key
#[derive(Debug)]
pub struct TodoStore {
    document: PersistentValue<TodoDocumentCodec>,
}

impl TodoStore {
    /// Restore from `store`, or start from the default state
    pub fn load(store: SharedStore) -> Self {
        let document = PersistentValue::<TodoDocumentCodec>::load(store, TODOS_KEY, TodoAppState::default());
        if document.is_restored() {
            log::info!("Restored {} todo items", document.get().todo_items.len());
        } else {
            log::info!("No stored todos, starting from the default state");
        }
        Self { document }
    }

    pub fn state(&self) -> &TodoAppState {
        self.document.get()
    }

    pub fn rows_for(&self, done: bool) -> Vec<TodoItem> {
        self.state().rows_for(done)
    }

    /// Apply `command` and persist the result
    ///
    /// Returns `Ok(false)` when the command changed nothing; nothing is
    /// written then. A failed write still leaves the new state in memory.
    pub fn dispatch(&mut self, command: TodoCommand) -> StorageResult<bool> {
        log::debug!("Dispatching {:?}", command);
        let next = reduce(self.state(), &command);
        if next == *self.state() {
            return Ok(false);
        }
        self.document.set(next)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use storage_state::{KeyValueStore, MemoryStore, StorageError};

    fn item(action: &str, done: bool) -> TodoItem {
        TodoItem { action: action.to_string(), done }
    }

    fn empty_store() -> (Arc<MemoryStore>, TodoStore) {
        let memory = Arc::new(MemoryStore::new());
        let store = TodoStore::load(memory.clone());
        (memory, store)
    }

    #[test]
    fn test_mount_without_document_yields_default() {
        let (memory, store) = empty_store();
        assert_eq!(
            *store.state(),
            TodoAppState {
                user_name: "Andrzej".to_string(),
                todo_items: vec![],
                show_completed: true,
            }
        );
        assert_eq!(memory.raw(TODOS_KEY), None);
        assert!(!store.document.is_restored());
    }

    #[test]
    fn test_create_duplicate_is_ignored() {
        let (memory, mut store) = empty_store();

        assert!(store.dispatch(TodoCommand::CreateTodo("Buy milk".into())).unwrap());
        let written = memory.raw(TODOS_KEY);
        assert!(!store.dispatch(TodoCommand::CreateTodo("Buy milk".into())).unwrap());

        assert_eq!(store.state().todo_items, vec![item("Buy milk", false)]);
        assert_eq!(memory.raw(TODOS_KEY), written);
    }

    #[test]
    fn test_duplicate_match_is_case_sensitive() {
        let (_, mut store) = empty_store();
        store.dispatch(TodoCommand::CreateTodo("Buy milk".into())).unwrap();
        store.dispatch(TodoCommand::CreateTodo("buy milk".into())).unwrap();
        assert_eq!(store.state().todo_items.len(), 2);
    }

    #[test]
    fn test_toggle_twice_restores_item() {
        let (_, mut store) = empty_store();
        store.dispatch(TodoCommand::CreateTodo("a".into())).unwrap();
        store.dispatch(TodoCommand::CreateTodo("b".into())).unwrap();

        store.dispatch(TodoCommand::ToggleTodo("a".into())).unwrap();
        assert_eq!(store.state().todo_items, vec![item("a", true), item("b", false)]);

        store.dispatch(TodoCommand::ToggleTodo("a".into())).unwrap();
        assert_eq!(store.state().todo_items, vec![item("a", false), item("b", false)]);
    }

    #[test]
    fn test_toggle_unknown_action_is_noop() {
        let (memory, mut store) = empty_store();
        store.dispatch(TodoCommand::CreateTodo("a".into())).unwrap();

        let changed = store.dispatch(TodoCommand::ToggleTodo("missing".into())).unwrap();

        assert!(!changed);
        assert_eq!(store.state().todo_items, vec![item("a", false)]);
        assert!(memory.raw(TODOS_KEY).is_some());
    }

    #[test]
    fn test_end_to_end_create_and_toggle() {
        let (_, mut store) = empty_store();
        store.dispatch(TodoCommand::CreateTodo("a".into())).unwrap();
        store.dispatch(TodoCommand::CreateTodo("b".into())).unwrap();
        store.dispatch(TodoCommand::toggle(&item("a", false))).unwrap();

        assert_eq!(store.rows_for(false), vec![item("b", false)]);
        assert_eq!(store.rows_for(true), vec![item("a", true)]);
    }

    #[test]
    fn test_visibility_is_persisted() {
        let (memory, mut store) = empty_store();
        assert!(store.dispatch(TodoCommand::SetVisibility(false)).unwrap());

        let reloaded = TodoStore::load(memory.clone());
        assert!(!reloaded.state().show_completed);
    }

    #[test]
    fn test_reload_restores_items() {
        let (memory, mut store) = empty_store();
        store.dispatch(TodoCommand::CreateTodo("a".into())).unwrap();
        store.dispatch(TodoCommand::ToggleTodo("a".into())).unwrap();

        let reloaded = TodoStore::load(memory.clone());
        assert!(reloaded.document.is_restored());
        assert_eq!(reloaded.state(), store.state());
    }

    #[test]
    fn test_malformed_document_falls_back_to_default() {
        let memory = Arc::new(MemoryStore::with_entries([(TODOS_KEY, "{\"userName\":")]));
        let store = TodoStore::load(memory);
        assert_eq!(*store.state(), TodoAppState::default());
    }

    #[test]
    fn test_failed_write_keeps_new_state() {
        struct ReadOnlyStore;

        impl KeyValueStore for ReadOnlyStore {
            fn get(&self, _key: &str) -> StorageResult<Option<String>> {
                Ok(None)
            }

            fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
                Err(StorageError::Write { key: key.to_string(), reason: "quota exceeded".to_string() })
            }
        }

        let mut store = TodoStore::load(Arc::new(ReadOnlyStore));
        let result = store.dispatch(TodoCommand::CreateTodo("a".into()));

        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(store.state().todo_items, vec![item("a", false)]);
    }

    fn arb_state() -> impl Strategy<Value = TodoAppState> {
        proptest::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..12).prop_map(|items| {
            TodoAppState {
                todo_items: items.into_iter().map(|(action, done)| TodoItem { action, done }).collect(),
                ..Default::default()
            }
        })
    }

    proptest! {
        #[test]
        fn prop_toggle_is_an_involution(state in arb_state(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!state.todo_items.is_empty());
            let target = TodoCommand::toggle(pick.get(&state.todo_items));
            let twice = reduce(&reduce(&state, &target), &target);
            prop_assert_eq!(twice, state);
        }

        #[test]
        fn prop_rows_partition_items(state in arb_state()) {
            let pending = state.rows_for(false);
            let completed = state.rows_for(true);

            prop_assert_eq!(pending.len() + completed.len(), state.todo_items.len());
            prop_assert!(pending.iter().all(|p| !completed.contains(p)));
            prop_assert!(state.todo_items.iter().all(|i| pending.contains(i) || completed.contains(i)));
        }

        #[test]
        fn prop_create_keeps_actions_unique(state in arb_state(), text in "[a-z]{1,6}") {
            let once = reduce(&state, &TodoCommand::CreateTodo(text.clone()));
            let twice = reduce(&once, &TodoCommand::CreateTodo(text));
            prop_assert_eq!(&once, &twice);
            prop_assert!(crate::document::TodoDocument::new(twice).validate().is_ok());
        }
    }
}
