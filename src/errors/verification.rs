use thiserror::Error;

/// Password verification failures caused by corrupt legacy data.
///
/// A password that simply does not match is not one of these; these
/// variants mean the stored record itself cannot be verified against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The record carries an algorithm tag outside the supported set.
    #[error("Unknown password algorithm: {tag}")]
    UnknownAlgorithm { tag: String },

    /// The stored hash is structurally invalid for its algorithm.
    #[error("Malformed password hash: {reason}")]
    MalformedHash { reason: String },
}
