// Providers layer - Work performers and business logic
//
// Providers contain the business logic the login coordinator composes:
// provider-code classification, legacy password verification, and
// generated document metadata.

pub mod auth_provider;
pub mod doc_meta_provider;
pub mod password_verifier;
pub mod phpass;

// Re-export providers for clean imports
pub use auth_provider::{AuthProvider, Credential, ModernAuthClient};
pub use doc_meta_provider::{DocMetaProvider, SystemDocMetaProvider};
pub use password_verifier::PasswordVerifier;
