// Stores layer - Data access over the document database
pub mod document_store;
pub mod legacy_user_store;
pub mod memory;
pub mod migration_store;

pub use document_store::DocumentStore;
pub use legacy_user_store::LegacyUserStore;
pub use memory::MemoryDocumentStore;
pub use migration_store::MigrationStore;
