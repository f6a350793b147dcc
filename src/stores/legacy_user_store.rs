use std::sync::Arc;

use crate::errors::StoreError;
use crate::stores::DocumentStore;
use crate::types::LegacyUserRecord;

/// Read-only access to the imported legacy user collection.
pub struct LegacyUserStore {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl LegacyUserStore {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Point lookup by email.
    ///
    /// `Ok(None)` when no legacy record exists; infrastructure failures
    /// propagate and must not be read as absence. The record is never
    /// created or modified through this store.
    pub async fn lookup(&self, email: &str) -> Result<Option<LegacyUserRecord>, StoreError> {
        let Some(doc) = self.store.get(&self.collection, email).await? else {
            return Ok(None);
        };
        let record = serde_json::from_value(doc).map_err(|e| StoreError::Deserialize {
            collection: self.collection.clone(),
            source: e,
        })?;
        Ok(Some(record))
    }
}
