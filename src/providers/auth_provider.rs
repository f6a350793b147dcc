use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{AuthProviderError, SignInError};

/// Provider code meaning no account exists for the email.
pub const CODE_USER_NOT_FOUND: &str = "auth/user-not-found";
/// Provider code meaning the account exists but the password was wrong.
pub const CODE_WRONG_PASSWORD: &str = "auth/wrong-password";

/// Opaque credential handed back by the provider after account
/// creation. Forwarded to the caller, never persisted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub uid: String,
}

/// Capability over the hosted auth provider.
///
/// Implementations wrap the real provider SDK; tests substitute an
/// in-memory fake. Failures carry the provider's raw error code.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Email/password sign-in for an existing account.
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthProviderError>;

    /// Register a new email/password account.
    async fn create_credential(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, AuthProviderError>;
}

/// Adapter owning the mapping from provider error codes to the shared
/// sign-in taxonomy. Unrecognized codes become [`SignInError::Other`]
/// with the raw code intact.
pub struct ModernAuthClient {
    provider: Arc<dyn AuthProvider>,
}

impl ModernAuthClient {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    /// Sign an existing user in, classifying any provider failure.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), SignInError> {
        self.provider
            .sign_in(email, password)
            .await
            .map_err(classify)
    }

    /// Register a fresh credential for a migrated user. Failures stay
    /// raw; callers wrap them in their own taxonomy.
    pub async fn create_credential(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, AuthProviderError> {
        self.provider.create_credential(email, password).await
    }
}

fn classify(err: AuthProviderError) -> SignInError {
    match err.code.as_str() {
        CODE_USER_NOT_FOUND => SignInError::UserNotFound,
        CODE_WRONG_PASSWORD => SignInError::WrongPassword,
        _ => SignInError::Other(err.code),
    }
}
