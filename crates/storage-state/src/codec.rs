//! Codecs between typed values and the raw strings a store holds.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StorageError, StorageResult};

/// Encoding of a value stored under one key
pub trait StorageCodec {
    type Value;

    fn encode(value: &Self::Value) -> StorageResult<String>;

    fn decode(raw: &str) -> StorageResult<Self::Value>;

    /// Stored strings that count as no value at all
    fn is_missing(_raw: &str) -> bool {
        false
    }
}

/// Plain string, stored verbatim
///
/// An empty stored string reads as missing, like `getItem(key) || default`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawText;

impl StorageCodec for RawText {
    type Value = String;

    fn encode(value: &String) -> StorageResult<String> {
        Ok(value.clone())
    }

    fn decode(raw: &str) -> StorageResult<String> {
        Ok(raw.to_string())
    }

    fn is_missing(raw: &str) -> bool {
        raw.is_empty()
    }
}

/// JSON document via serde
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(PhantomData<fn() -> T>);

impl<T: Serialize + DeserializeOwned> StorageCodec for Json<T> {
    type Value = T;

    fn encode(value: &T) -> StorageResult<String> {
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn decode(raw: &str) -> StorageResult<T> {
        serde_json::from_str(raw).map_err(|e| StorageError::Deserialization(e.to_string()))
    }
}
