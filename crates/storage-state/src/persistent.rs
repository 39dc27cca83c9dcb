//! Persistent Value
//!
//! One value bound to one key: read at creation, written back on change.

use std::fmt;
use std::marker::PhantomData;

use crate::codec::StorageCodec;
use crate::error::StorageResult;
use crate::store::SharedStore;

pub struct PersistentValue<C: StorageCodec> {
    store: SharedStore,
    key: String,
    value: C::Value,
    restored: bool,
    _codec: PhantomData<fn() -> C>,
}

impl<C: StorageCodec> PersistentValue<C> {
    /// Read `key` from `store`, falling back to `default`
    ///
    /// Never fails: an unavailable store, a missing key and an undecodable
    /// value all yield `default`. Only the middle one is silent.
    pub fn load(store: SharedStore, key: impl Into<String>, default: C::Value) -> Self {
        let key = key.into();
        let (value, restored) = match store.get(&key) {
            Ok(Some(raw)) if C::is_missing(&raw) => (default, false),
            Ok(Some(raw)) => match C::decode(&raw) {
                Ok(value) => (value, true),
                Err(e) => {
                    log::warn!("Discarding stored value for '{}': {}", key, e);
                    (default, false)
                }
            },
            Ok(None) => (default, false),
            Err(e) => {
                log::warn!("Could not read '{}', using default: {}", key, e);
                (default, false)
            }
        };
        Self { store, key, value, restored, _codec: PhantomData }
    }

    /// Whether the value came from the store rather than the default
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &C::Value {
        &self.value
    }

    /// Replace the value and write it through
    ///
    /// The in-memory value is replaced even when the write fails.
    pub fn set(&mut self, value: C::Value) -> StorageResult<()> {
        self.value = value;
        self.flush()
    }

    /// Mutate the value in place and write it through
    pub fn update(&mut self, f: impl FnOnce(&mut C::Value)) -> StorageResult<()> {
        f(&mut self.value);
        self.flush()
    }

    /// Write the current value to the store
    pub fn flush(&self) -> StorageResult<()> {
        let raw = C::encode(&self.value)?;
        self.store.set(&self.key, &raw)
    }

    pub fn into_inner(self) -> C::Value {
        self.value
    }
}

impl<C: StorageCodec> fmt::Debug for PersistentValue<C>
where
    C::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
