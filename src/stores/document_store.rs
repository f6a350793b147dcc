use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;

/// Point read/write capability over the hosted document database.
///
/// Documents live at `collection/key`. A missing document is
/// `Ok(None)`, never an error; [`StoreError`] is reserved for
/// infrastructure failures such as lost connectivity.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write the document at `collection/key`, replacing any existing
    /// document at that key.
    async fn set(&self, collection: &str, key: &str, doc: Value) -> Result<(), StoreError>;
}
