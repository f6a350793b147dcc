// Types layer - login outcomes and user record models
pub mod outcome;
pub mod user;

pub use outcome::LoginOutcome;
pub use user::{DocMeta, LegacyUserRecord, ModernUserRecord, PasswordAlgorithm};
