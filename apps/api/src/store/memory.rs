use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{KeyValueStore, StoreError};

/// In-process store. Used when no Redis URL is configured, and in tests.
/// Contents last as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get_raw("k").await.unwrap(), None);
        store.set_raw("k", "v".to_string()).await.unwrap();
        assert_eq!(store.get_raw("k").await.unwrap().as_deref(), Some("v"));
    }
}
