use md5::{Digest, Md5};

use crate::errors::VerificationError;
use crate::providers::phpass;
use crate::types::PasswordAlgorithm;

/// Verifies plaintext passwords against stored legacy hashes.
///
/// Dispatch is purely a function of the algorithm variant. `Ok(false)`
/// means the password does not match; `Err` means the stored hash
/// itself is unusable.
pub struct PasswordVerifier;

impl PasswordVerifier {
    pub fn new() -> Self {
        Self
    }

    pub fn verify(
        &self,
        plaintext: &str,
        stored_hash: &str,
        algorithm: PasswordAlgorithm,
    ) -> Result<bool, VerificationError> {
        match algorithm {
            PasswordAlgorithm::Phpass => phpass::check(plaintext, stored_hash),
            PasswordAlgorithm::Md5 => Ok(md5_matches(plaintext, stored_hash)),
        }
    }
}

impl Default for PasswordVerifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsalted MD5: hex digest of the plaintext compared for exact
/// equality with the stored value.
fn md5_matches(plaintext: &str, stored_hash: &str) -> bool {
    let digest = format!("{:x}", Md5::digest(plaintext.as_bytes()));
    digest.eq_ignore_ascii_case(stored_hash)
}
