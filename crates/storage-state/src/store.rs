//! Key/Value Store Capability
//!
//! The abstract interface every persisted value talks to.
//! Implementations: browser `localStorage`, in-memory.

use std::sync::Arc;

use crate::error::StorageResult;

/// String-keyed persistent storage
///
/// Mirrors the host `getItem`/`setItem` pair. Access is single-threaded in the
/// browser, the `Send + Sync` bound only lets handles live in reactive state.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the raw value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Shared handle passed explicitly to every store constructor
pub type SharedStore = Arc<dyn KeyValueStore>;
