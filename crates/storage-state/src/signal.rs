//! Leptos binding of a persisted value to a signal.

use leptos::prelude::*;

use crate::codec::StorageCodec;
use crate::persistent::PersistentValue;
use crate::store::SharedStore;

/// Signal initialised from `key` and written back on every change
///
/// The write-back effect also runs once on mount, so the current value is
/// always present in the store after the first render.
pub fn use_storage_state<C>(
    store: SharedStore,
    key: &str,
    default: C::Value,
) -> (ReadSignal<C::Value>, WriteSignal<C::Value>)
where
    C: StorageCodec + 'static,
    C::Value: Clone + Send + Sync + 'static,
{
    let mut persisted = PersistentValue::<C>::load(store, key, default);
    let (value, set_value) = signal(persisted.get().clone());

    Effect::new(move |_| {
        let current = value.get();
        if let Err(e) = persisted.set(current) {
            log::error!("Failed to persist '{}': {}", persisted.key(), e);
        }
    });

    (value, set_value)
}
