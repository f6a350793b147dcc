//! Verification of phpass portable hashes (`$P$` / `$H$`), the salted,
//! iterated MD5 scheme the prior platform stored passwords under.
//!
//! Only verification is implemented; this crate never produces new
//! phpass hashes.

use md5::{Digest, Md5};

use crate::errors::VerificationError;

/// The phpass base64 alphabet.
const ITOA64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Portable hashes are always `$P$` + count char + 8-byte salt + 22
/// encoded digest chars.
const HASH_LEN: usize = 34;

const MIN_COUNT_LOG2: usize = 7;
const MAX_COUNT_LOG2: usize = 30;

/// Check a plaintext password against a stored portable hash.
///
/// `Ok(false)` is a plain mismatch; `Err` means the stored hash is not
/// a well-formed portable hash and the record is corrupt.
pub fn check(password: &str, stored: &str) -> Result<bool, VerificationError> {
    let computed = crypt_private(password.as_bytes(), stored)?;
    Ok(constant_time_eq(computed.as_bytes(), stored.as_bytes()))
}

fn malformed(reason: &str) -> VerificationError {
    VerificationError::MalformedHash {
        reason: reason.to_string(),
    }
}

fn crypt_private(password: &[u8], setting: &str) -> Result<String, VerificationError> {
    if setting.len() != HASH_LEN || !setting.is_ascii() {
        return Err(malformed("hash is not a 34-character portable hash"));
    }
    if &setting[..3] != "$P$" && &setting[..3] != "$H$" {
        return Err(malformed("unrecognized hash prefix"));
    }

    let bytes = setting.as_bytes();
    let count_log2 = ITOA64
        .iter()
        .position(|&c| c == bytes[3])
        .ok_or_else(|| malformed("invalid iteration count character"))?;
    if !(MIN_COUNT_LOG2..=MAX_COUNT_LOG2).contains(&count_log2) {
        return Err(malformed("iteration count out of range"));
    }
    let salt = &bytes[4..12];

    // digest = md5(salt + password), then count rounds of
    // digest = md5(digest + password)
    let mut digest = Md5::new_with_prefix(salt).chain_update(password).finalize();
    for _ in 0..(1u64 << count_log2) {
        digest = Md5::new_with_prefix(&digest)
            .chain_update(password)
            .finalize();
    }

    let mut out = String::with_capacity(HASH_LEN);
    out.push_str(&setting[..12]);
    out.push_str(&encode64(&digest));
    Ok(out)
}

/// phpass base64 variant: little-endian 6-bit groups over the itoa64
/// alphabet. 16 digest bytes encode to 22 characters.
fn encode64(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    let mut i = 0;
    while i < input.len() {
        let mut value = input[i] as u32;
        i += 1;
        out.push(ITOA64[(value & 0x3f) as usize] as char);
        if i < input.len() {
            value |= (input[i] as u32) << 8;
        }
        out.push(ITOA64[((value >> 6) & 0x3f) as usize] as char);
        if i >= input.len() {
            break;
        }
        i += 1;
        if i < input.len() {
            value |= (input[i] as u32) << 16;
        }
        out.push(ITOA64[((value >> 12) & 0x3f) as usize] as char);
        if i >= input.len() {
            break;
        }
        i += 1;
        out.push(ITOA64[((value >> 18) & 0x3f) as usize] as char);
    }
    out
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
