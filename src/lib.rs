//! Two-tier login orchestration: sign in against the modern auth
//! provider, falling back to transparent one-time migration of accounts
//! imported from the prior platform.
//!
//! The entry point is [`coordinators::LoginCoordinator`]; every branch
//! of a login attempt resolves to a [`types::LoginOutcome`].

pub mod config;
pub mod coordinators;
pub mod errors;
pub mod providers;
pub mod stores;
pub mod types;

#[cfg(test)]
pub mod test;
