// Shared setup for the integration suite

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use user_migration::config::MigrationSettings;
use user_migration::coordinators::LoginCoordinator;
use user_migration::errors::AuthProviderError;
use user_migration::providers::auth_provider::{CODE_USER_NOT_FOUND, CODE_WRONG_PASSWORD};
use user_migration::providers::{AuthProvider, Credential, SystemDocMetaProvider};
use user_migration::stores::MemoryDocumentStore;

/// md5("password")
pub const MD5_OF_PASSWORD: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

/// Portable hash of "test12345".
pub const PHPASS_HASH: &str = "$P$9IQRaTwmfeRo7ud9Fh4E2PdI0S3r.L0";

/// In-memory stand-in for the hosted auth provider.
pub struct TestAuthProvider {
    accounts: Mutex<HashMap<String, String>>,
    fail_creation: AtomicBool,
}

impl TestAuthProvider {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
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

    pub fn fail_credential_creation(&self, fail: bool) {
        self.fail_creation.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthProvider for TestAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthProviderError> {
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

/// Coordinator over in-memory fakes, with handles to both for
/// seeding and assertions.
pub fn setup() -> (
    Arc<TestAuthProvider>,
    Arc<MemoryDocumentStore>,
    LoginCoordinator,
) {
    let auth = Arc::new(TestAuthProvider::new());
    let store = Arc::new(MemoryDocumentStore::new());
    let coordinator = LoginCoordinator::new(
        auth.clone(),
        store.clone(),
        Arc::new(SystemDocMetaProvider),
        MigrationSettings::default(),
    );
    (auth, store, coordinator)
}
