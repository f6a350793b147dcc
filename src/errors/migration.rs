use thiserror::Error;

use crate::errors::{AuthProviderError, StoreError};

/// Failures while promoting a legacy user into the modern tier.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// The migrated user record could not be persisted.
    #[error("Failed to write migrated user record: {0}")]
    WriteFailed(#[from] StoreError),

    /// The record was written but the modern credential could not be
    /// created. The next successful legacy login reconciles this.
    #[error("Failed to create modern credential: {0}")]
    CredentialCreationFailed(#[from] AuthProviderError),
}
