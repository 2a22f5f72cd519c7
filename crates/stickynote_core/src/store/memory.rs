//! In-process key-value store.

use super::{KeyValueStore, StoreResult};
use std::collections::HashMap;

/// `HashMap`-backed store. Contents live as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut items = HashMap::new();
        items.insert(key.into(), value.into());
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.items.remove(key);
        Ok(())
    }
}
