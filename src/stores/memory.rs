use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;
use crate::stores::DocumentStore;

/// In-memory [`DocumentStore`] backed by a mutex-guarded map.
///
/// Used by the test suites and for local development. Keyed exactly
/// like the hosted store, `collection/key`. Read counts per collection
/// are tracked so tests can assert which tiers were consulted, and the
/// store can be flipped offline to exercise unavailability paths.
#[derive(Default)]
pub struct MemoryDocumentStore {
    docs: Mutex<HashMap<(String, String), Value>>,
    reads: Mutex<HashMap<String, usize>>,
    offline: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document directly, bypassing read accounting.
    pub fn insert(&self, collection: &str, key: &str, doc: Value) {
        self.docs
            .lock()
            .expect("document map lock poisoned")
            .insert((collection.to_string(), key.to_string()), doc);
    }

    pub fn contains(&self, collection: &str, key: &str) -> bool {
        self.docs
            .lock()
            .expect("document map lock poisoned")
            .contains_key(&(collection.to_string(), key.to_string()))
    }

    /// Number of point reads issued against a collection.
    pub fn reads(&self, collection: &str) -> usize {
        self.reads
            .lock()
            .expect("read counter lock poisoned")
            .get(collection)
            .copied()
            .unwrap_or(0)
    }

    /// Make every subsequent operation fail as unavailable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self, operation: &str) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(operation, "store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.check_online("get")?;
        *self
            .reads
            .lock()
            .map_err(|_| StoreError::unavailable("get", "read counter lock poisoned"))?
            .entry(collection.to_string())
            .or_insert(0) += 1;
        let docs = self
            .docs
            .lock()
            .map_err(|_| StoreError::unavailable("get", "document map lock poisoned"))?;
        Ok(docs.get(&(collection.to_string(), key.to_string())).cloned())
    }

    async fn set(&self, collection: &str, key: &str, doc: Value) -> Result<(), StoreError> {
        self.check_online("set")?;
        self.docs
            .lock()
            .map_err(|_| StoreError::unavailable("set", "document map lock poisoned"))?
            .insert((collection.to_string(), key.to_string()), doc);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn missing_document_reads_as_none() {
        let store = MemoryDocumentStore::new();
        assert!(store.get("users", "a@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryDocumentStore::new();
        store
            .set("users", "a@x.com", json!({"email": "a@x.com"}))
            .await
            .unwrap();
        let doc = store.get("users", "a@x.com").await.unwrap().unwrap();
        assert_eq!(doc["email"], json!("a@x.com"));
    }

    #[tokio::test]
    async fn reads_are_counted_per_collection() {
        let store = MemoryDocumentStore::new();
        store.get("users", "a@x.com").await.unwrap();
        store.get("users", "b@x.com").await.unwrap();
        assert_eq!(store.reads("users"), 2);
        assert_eq!(store.reads("_legacyUsers"), 0);
    }

    #[tokio::test]
    async fn offline_store_fails_as_unavailable() {
        let store = MemoryDocumentStore::new();
        store.set_offline(true);
        let err = store.get("users", "a@x.com").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }
}
