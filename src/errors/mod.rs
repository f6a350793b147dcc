// Errors layer - one taxonomy per domain
pub mod auth;
pub mod migration;
pub mod store;
pub mod verification;

// Re-exports for convenience
pub use auth::{AuthProviderError, SignInError};
pub use migration::MigrationError;
pub use store::StoreError;
pub use verification::VerificationError;
