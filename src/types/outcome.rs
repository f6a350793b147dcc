use serde::{Deserialize, Serialize};

/// Uniform result of a login attempt.
///
/// `complete` separates terminal outcomes from the single transitional
/// one: `complete == false` means the modern tier had no account and the
/// orchestration continues into the legacy tier. A terminal outcome must
/// not be retried on the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: String,
    pub complete: bool,
}

impl LoginOutcome {
    pub fn new(success: bool, message: impl Into<String>, complete: bool) -> Self {
        Self {
            success,
            message: message.into(),
            complete,
        }
    }

    /// Terminal success.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(true, message, true)
    }

    /// Terminal failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message, true)
    }

    /// Non-terminal: the next tier should be attempted.
    pub fn transitional(message: impl Into<String>) -> Self {
        Self::new(false, message, false)
    }
}
