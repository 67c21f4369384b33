//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::RwLock;

use super::r#trait::{KeyValueStore, KvError};

/// In-memory store with an optional byte quota.
///
/// Intended for tests/dev. The quota counts the UTF-8 bytes of all keys and
/// values, which is close enough to how browser-style storage accounts space
/// to exercise the capacity-exhaustion path deterministically.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once total stored bytes would exceed
    /// `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn usage_after(entries: &HashMap<String, String>, key: &str, value: &str) -> usize {
        let current: usize = entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        current + key.len() + value.len()
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| KvError::Backend("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| KvError::Backend("lock poisoned".to_string()))?;

        if let Some(quota) = self.quota_bytes {
            if Self::usage_after(&entries, key, value) > quota {
                return Err(KvError::CapacityExceeded);
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| KvError::Backend("lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
