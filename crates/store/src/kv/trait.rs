//! Key-value store abstraction.
//!
//! The catalog persists as one string value under a fixed key. Backends must
//! keep the capacity-exceeded condition distinguishable from other failures:
//! the store's degrade-and-retry policy triggers only on capacity.

use std::sync::Arc;

use thiserror::Error;

/// Backend storage error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KvError {
    /// The write did not fit. The caller may shrink the payload and retry.
    #[error("storage capacity exceeded")]
    CapacityExceeded,

    /// Any other backend failure (IO, poisoned lock, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// String key-value store with a capacity-aware write path.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
    fn remove(&self, key: &str) -> Result<(), KvError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        (**self).remove(key)
    }
}
