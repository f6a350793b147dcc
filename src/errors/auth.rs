use thiserror::Error;

/// Raw failure reported by the hosted auth provider.
///
/// The provider reports failures as a machine-readable code (for example
/// `auth/user-not-found`) plus a human-readable message. Classification
/// keys on the code only; the message is carried for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct AuthProviderError {
    pub code: String,
    pub message: String,
}

impl AuthProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Sign-in failure after classification of the provider code.
///
/// `Other` keeps the raw provider code so unrecognized failures stay
/// observable instead of being swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    /// No account exists for this email in the modern tier.
    #[error("No modern account exists for this email")]
    UserNotFound,

    /// A modern account exists but the password did not match.
    #[error("Invalid password, please try again")]
    WrongPassword,

    /// Any provider code the classifier does not recognize, passed
    /// through verbatim.
    #[error("{0}")]
    Other(String),
}
