use thiserror::Error;

/// Document store infrastructure failures.
///
/// A missing document is not an error: point reads return `Option` and
/// absence must never surface as one of these variants.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached or the operation failed outright.
    #[error("Store unavailable: {operation} failed: {message}")]
    Unavailable { operation: String, message: String },

    /// A document could not be encoded for writing.
    #[error("Failed to serialize {collection} document: {source}")]
    Serialize {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored document does not match the expected schema.
    #[error("Failed to deserialize {collection} document: {source}")]
    Deserialize {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn unavailable(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
