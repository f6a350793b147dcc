use chrono::Utc;
use uuid::Uuid;

use crate::types::DocMeta;

/// Produces the generated metadata stamped onto new documents.
///
/// Injected wherever documents are created so tests can fix ids and
/// timestamps instead of reaching for the system clock.
pub trait DocMetaProvider: Send + Sync {
    fn generate(&self, collection: &str) -> DocMeta;
}

/// Production implementation: random ids, current UTC time.
pub struct SystemDocMetaProvider;

impl DocMetaProvider for SystemDocMetaProvider {
    fn generate(&self, collection: &str) -> DocMeta {
        let now = Utc::now();
        DocMeta {
            id: Uuid::new_v4().simple().to_string(),
            collection: collection.to_string(),
            created: now,
            modified: now,
        }
    }
}
