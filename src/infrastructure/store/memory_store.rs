//! In-memory store implementation.

use crate::domain::repositories::{LinkStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

/// A store backed by a process-local `HashMap`.
///
/// `set_if_absent` holds the write lock across the existence check and the
/// insert, so it is atomic within the process. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        debug!("Using MemoryStore (mappings are not persisted)");
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn get(&self, id: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn set_if_absent(&self, id: &str, target: &str) -> StoreResult<bool> {
        match self.entries.write().await.entry(id.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(target.to_string());
                Ok(true)
            }
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
