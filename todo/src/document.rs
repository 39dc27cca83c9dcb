//! Persisted Todo Document
//!
//! Versioned wrapper around `TodoAppState`, validated on load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use storage_state::{StorageCodec, StorageError, StorageResult};

use crate::models::TodoAppState;

/// Current document schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Stored shape: `{"version":1,"userName":..,"todoItems":[..],"showCompleted":..}`
///
/// Documents written before versioning carry no `version` and read as 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDocument {
    #[serde(default = "legacy_version")]
    pub version: u32,
    #[serde(flatten)]
    pub state: TodoAppState,
}

fn legacy_version() -> u32 {
    1
}

impl TodoDocument {
    pub fn new(state: TodoAppState) -> Self {
        Self { version: SCHEMA_VERSION, state }
    }

    /// Check version and `action` uniqueness
    pub fn validate(&self) -> StorageResult<()> {
        if self.version != SCHEMA_VERSION {
            return Err(StorageError::InvalidDocument(format!(
                "unsupported version {} (expected {})",
                self.version, SCHEMA_VERSION
            )));
        }
        let mut seen = HashSet::new();
        for item in &self.state.todo_items {
            if !seen.insert(item.action.as_str()) {
                return Err(StorageError::InvalidDocument(format!(
                    "duplicate action '{}'",
                    item.action
                )));
            }
        }
        Ok(())
    }
}

/// Codec storing `TodoAppState` as a `TodoDocument`
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoDocumentCodec;

impl StorageCodec for TodoDocumentCodec {
    type Value = TodoAppState;

    fn encode(state: &TodoAppState) -> StorageResult<String> {
        serde_json::to_string(&TodoDocument::new(state.clone()))
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn decode(raw: &str) -> StorageResult<TodoAppState> {
        let document: TodoDocument =
            serde_json::from_str(raw).map_err(|e| StorageError::Deserialization(e.to_string()))?;
        document.validate()?;
        Ok(document.state)
    }
}
