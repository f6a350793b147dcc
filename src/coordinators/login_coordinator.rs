use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::MigrationSettings;
use crate::errors::SignInError;
use crate::providers::{AuthProvider, DocMetaProvider, ModernAuthClient, PasswordVerifier};
use crate::stores::{DocumentStore, LegacyUserStore, MigrationStore};
use crate::types::{LegacyUserRecord, LoginOutcome, ModernUserRecord, PasswordAlgorithm};

pub const MSG_SIGNED_IN: &str = "User signed in successfully";
pub const MSG_MIGRATED: &str = "User migrated successfully";
pub const MSG_INVALID_PASSWORD: &str = "Invalid password, please try again";
pub const MSG_USER_DOES_NOT_EXIST: &str = "User does not exist";

/// Orchestrates a login attempt across the modern and legacy tiers.
///
/// The modern provider is always tried first. Only its "no such user"
/// failure opens the legacy tier; a wrong password against an existing
/// modern account terminates immediately, so a stale legacy credential
/// can never satisfy a login for an already-migrated account and the
/// legacy tier never reveals whether an account exists.
///
/// Every branch resolves to a [`LoginOutcome`]; no error type crosses
/// this boundary.
pub struct LoginCoordinator {
    auth_client: Arc<ModernAuthClient>,
    legacy_users: LegacyUserStore,
    migration_store: MigrationStore,
    verifier: PasswordVerifier,
    meta_provider: Arc<dyn DocMetaProvider>,
    user_collection: String,
}

impl LoginCoordinator {
    /// Compose the coordinator from its injected capabilities. Stores
    /// and the classifying auth client are created internally.
    pub fn new(
        auth_provider: Arc<dyn AuthProvider>,
        document_store: Arc<dyn DocumentStore>,
        meta_provider: Arc<dyn DocMetaProvider>,
        settings: MigrationSettings,
    ) -> Self {
        let auth_client = Arc::new(ModernAuthClient::new(auth_provider));
        Self {
            legacy_users: LegacyUserStore::new(document_store.clone(), settings.legacy_collection),
            migration_store: MigrationStore::new(
                document_store,
                auth_client.clone(),
                settings.user_collection.clone(),
            ),
            auth_client,
            verifier: PasswordVerifier::new(),
            meta_provider,
            user_collection: settings.user_collection,
        }
    }

    /// Resolve a login attempt.
    ///
    /// Tries the modern tier first and falls through to legacy lookup,
    /// verification, and migration only when the modern tier reports no
    /// such user. The returned outcome is always terminal.
    pub async fn attempt_login(&self, email: &str, password: &str) -> LoginOutcome {
        let status = self.attempt_modern_sign_in(email, password).await;
        if status.complete {
            return status;
        }
        self.attempt_legacy_migration(email, password).await
    }

    async fn attempt_modern_sign_in(&self, email: &str, password: &str) -> LoginOutcome {
        match self.auth_client.sign_in(email, password).await {
            Ok(()) => {
                info!(email, "modern sign-in succeeded");
                LoginOutcome::success(MSG_SIGNED_IN)
            }
            Err(SignInError::UserNotFound) => {
                debug!(email, "no modern account, checking for legacy user");
                LoginOutcome::transitional("Checking for legacy user")
            }
            Err(SignInError::WrongPassword) => {
                // a modern account exists: the legacy tier is never consulted
                info!(email, "modern sign-in rejected, wrong password");
                LoginOutcome::failure(MSG_INVALID_PASSWORD)
            }
            Err(SignInError::Other(code)) => {
                warn!(email, %code, "modern sign-in failed");
                LoginOutcome::failure(code)
            }
        }
    }

    async fn attempt_legacy_migration(&self, email: &str, password: &str) -> LoginOutcome {
        let record = match self.legacy_users.lookup(email).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(email, "no legacy record");
                return LoginOutcome::failure(MSG_USER_DOES_NOT_EXIST);
            }
            Err(err) => {
                error!(email, %err, "legacy lookup failed");
                return LoginOutcome::failure(err.to_string());
            }
        };

        let algorithm = match PasswordAlgorithm::from_tag(&record.password_alg) {
            Ok(algorithm) => algorithm,
            Err(err) => {
                error!(email, %err, "corrupt legacy record");
                return LoginOutcome::failure(err.to_string());
            }
        };

        match self.verifier.verify(password, &record.password, algorithm) {
            Ok(true) => {}
            Ok(false) => {
                info!(email, "legacy password mismatch");
                return LoginOutcome::failure(MSG_INVALID_PASSWORD);
            }
            Err(err) => {
                error!(email, %err, "legacy hash unusable");
                return LoginOutcome::failure(err.to_string());
            }
        }

        debug!(email, "legacy password verified, migrating user");
        self.migrate(email, password, &record).await
    }

    async fn migrate(&self, email: &str, password: &str, legacy: &LegacyUserRecord) -> LoginOutcome {
        match self.migration_store.modern_record_exists(email).await {
            // a previous attempt wrote the record but credential
            // creation failed; the rewrite below reconciles it
            Ok(true) => warn!(email, "partial migration found, reconciling"),
            Ok(false) => {}
            Err(err) => {
                error!(email, %err, "migration pre-check failed");
                return LoginOutcome::failure(err.to_string());
            }
        }

        let meta = self.meta_provider.generate(&self.user_collection);
        let record = ModernUserRecord::from_legacy(email, legacy, meta);
        if let Err(err) = self.migration_store.write(&record).await {
            error!(email, %err, "migration write failed");
            return LoginOutcome::failure(err.to_string());
        }

        match self.migration_store.create_credential(email, password).await {
            Ok(credential) => {
                info!(email, uid = %credential.uid, "user migrated");
                LoginOutcome::success(MSG_MIGRATED)
            }
            Err(err) => {
                error!(email, %err, "credential creation failed");
                LoginOutcome::failure(err.to_string())
            }
        }
    }
}
