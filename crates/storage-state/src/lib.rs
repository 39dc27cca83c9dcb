//! Storage State
//!
//! Values bound to a key in a host key/value store, read once on creation and
//! written back on every change. The store is injected, never a global.

mod codec;
mod error;
mod local;
mod memory;
mod persistent;
mod signal;
mod store;

pub use codec::{Json, RawText, StorageCodec};
pub use error::{StorageError, StorageResult};
pub use local::BrowserStorage;
pub use memory::MemoryStore;
pub use persistent::PersistentValue;
pub use signal::use_storage_state;
pub use store::{KeyValueStore, SharedStore};
