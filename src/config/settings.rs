use crate::config::env_provider::EnvironmentProvider;

/// Collection holding accounts imported from the prior platform.
pub const DEFAULT_LEGACY_COLLECTION: &str = "_legacyUsers";
/// Collection holding fully provisioned modern accounts.
pub const DEFAULT_USER_COLLECTION: &str = "users";

/// Collection names for the two user tiers.
#[derive(Debug, Clone)]
pub struct MigrationSettings {
    pub legacy_collection: String,
    pub user_collection: String,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            legacy_collection: DEFAULT_LEGACY_COLLECTION.to_string(),
            user_collection: DEFAULT_USER_COLLECTION.to_string(),
        }
    }
}

impl MigrationSettings {
    /// Load from `LEGACY_USER_COLLECTION` / `USER_COLLECTION`, falling
    /// back to the platform defaults.
    pub fn from_env(env: &impl EnvironmentProvider) -> Self {
        Self {
            legacy_collection: env
                .get_var("LEGACY_USER_COLLECTION")
                .unwrap_or_else(|| DEFAULT_LEGACY_COLLECTION.to_string()),
            user_collection: env
                .get_var("USER_COLLECTION")
                .unwrap_or_else(|| DEFAULT_USER_COLLECTION.to_string()),
        }
    }
}
