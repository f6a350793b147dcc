// Shared fakes and setup for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::config::MigrationSettings;
use crate::coordinators::LoginCoordinator;
use crate::errors::AuthProviderError;
use crate::providers::auth_provider::{CODE_USER_NOT_FOUND, CODE_WRONG_PASSWORD};
use crate::providers::{AuthProvider, Credential, DocMetaProvider};
use crate::stores::MemoryDocumentStore;
use crate::types::DocMeta;

/// md5("password")
pub const MD5_OF_PASSWORD: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

/// Portable hash of "test12345", the portable-hash reference vector.
pub const PHPASS_HASH: &str = "$P$9IQRaTwmfeRo7ud9Fh4E2PdI0S3r.L0";

/// In-memory auth provider behaving like the hosted provider's
/// email/password tier: coded errors for unknown users and wrong
/// passwords, account creation for migrated users.
pub struct FakeAuthProvider {
    accounts: Mutex<HashMap<String, String>>,
    forced_sign_in_code: Mutex<Option<String>>,
    fail_creation: AtomicBool,
}

impl FakeAuthProvider {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            forced_sign_in_code: Mutex::new(None),
            fail_creation: AtomicBool::new(false),
        }
    }

    pub fn add_account(&self, email: &str, password: &str) {
        self.accounts
            .lock()
            .unwrap()
            .insert(email.to_string(), password.to_string());
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.accounts.lock().unwrap().contains_key(email)
    }

    /// Make every sign-in fail with the given raw provider code.
    pub fn force_sign_in_code(&self, code: &str) {
        *self.forced_sign_in_code.lock().unwrap() = Some(code.to_string());
    }

    /// Toggle credential-creation outages.
    pub fn fail_credential_creation(&self, fail: bool) {
        self.fail_creation.store(fail, Ordering::SeqCst);
    }
}

impl Default for FakeAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthProviderError> {
        if let Some(code) = self.forced_sign_in_code.lock().unwrap().clone() {
            return Err(AuthProviderError::new(code, "forced failure"));
        }
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            None => Err(AuthProviderError::new(
                CODE_USER_NOT_FOUND,
                "no user record for this identifier",
            )),
            Some(stored) if stored == password => Ok(()),
            Some(_) => Err(AuthProviderError::new(
                CODE_WRONG_PASSWORD,
                "the password is invalid",
            )),
        }
    }

    async fn create_credential(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Credential, AuthProviderError> {
        if self.fail_creation.load(Ordering::SeqCst) {
            return Err(AuthProviderError::new(
                "auth/network-request-failed",
                "connection lost",
            ));
        }
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AuthProviderError::new(
                "auth/email-already-in-use",
                "account already exists",
            ));
        }
        accounts.insert(email.to_string(), password.to_string());
        Ok(Credential {
            uid: format!("uid-{email}"),
        })
    }
}

/// Deterministic metadata for asserting persisted documents.
pub struct FixedDocMetaProvider;

impl DocMetaProvider for FixedDocMetaProvider {
    fn generate(&self, collection: &str) -> DocMeta {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        DocMeta {
            id: "doc-0001".to_string(),
            collection: collection.to_string(),
            created: at,
            modified: at,
        }
    }
}

/// Coordinator wired over in-memory fakes with default collections.
pub fn setup_coordinator() -> (
    Arc<FakeAuthProvider>,
    Arc<MemoryDocumentStore>,
    LoginCoordinator,
) {
    let auth = Arc::new(FakeAuthProvider::new());
    let store = Arc::new(MemoryDocumentStore::new());
    let coordinator = LoginCoordinator::new(
        auth.clone(),
        store.clone(),
        Arc::new(FixedDocMetaProvider),
        MigrationSettings::default(),
    );
    (auth, store, coordinator)
}
