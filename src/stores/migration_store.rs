use std::sync::Arc;

use crate::errors::{MigrationError, StoreError};
use crate::providers::{Credential, ModernAuthClient};
use crate::stores::DocumentStore;
use crate::types::ModernUserRecord;

/// Persists migrated user records and provisions their modern
/// credential.
pub struct MigrationStore {
    store: Arc<dyn DocumentStore>,
    auth_client: Arc<ModernAuthClient>,
    collection: String,
}

impl MigrationStore {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        auth_client: Arc<ModernAuthClient>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            store,
            auth_client,
            collection: collection.into(),
        }
    }

    /// Whether a modern record already exists for this email. A record
    /// with no matching credential is a partial migration left by an
    /// earlier attempt that failed between the write and the credential
    /// creation.
    pub async fn modern_record_exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.store.get(&self.collection, email).await?.is_some())
    }

    /// Persist the migrated record. Writes are keyed by email and
    /// replace, so a retried migration converges on the same document.
    pub async fn write(&self, record: &ModernUserRecord) -> Result<(), MigrationError> {
        let doc = serde_json::to_value(record).map_err(|e| StoreError::Serialize {
            collection: self.collection.clone(),
            source: e,
        })?;
        self.store
            .set(&self.collection, &record.email, doc)
            .await
            .map_err(MigrationError::WriteFailed)
    }

    /// Provision the modern credential for a migrated user.
    pub async fn create_credential(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, MigrationError> {
        self.auth_client
            .create_credential(email, password)
            .await
            .map_err(MigrationError::CredentialCreationFailed)
    }
}
