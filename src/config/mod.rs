// Configuration layer - env-driven settings and logging setup
pub mod env_provider;
pub mod logging;
pub mod settings;

pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use logging::init_logging;
pub use settings::MigrationSettings;
