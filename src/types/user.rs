use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::VerificationError;

/// Hashing scheme tag carried on a legacy user record.
///
/// Closed set: accounts imported from the prior platform carry either a
/// phpass portable hash or a bare MD5 digest. Any other tag is corrupt
/// record data, never a new scheme to accept silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordAlgorithm {
    Phpass,
    Md5,
}

impl PasswordAlgorithm {
    /// Parse the stored tag. Unrecognized tags surface as
    /// [`VerificationError::UnknownAlgorithm`], distinct from a
    /// password mismatch.
    pub fn from_tag(tag: &str) -> Result<Self, VerificationError> {
        match tag {
            "phpass" => Ok(Self::Phpass),
            "md5" => Ok(Self::Md5),
            other => Err(VerificationError::UnknownAlgorithm {
                tag: other.to_string(),
            }),
        }
    }
}

/// User record imported from the prior platform. Read-only here: looked
/// up once, never mutated.
///
/// `password` and `password_alg` exist only on this record and must
/// never reach any document written by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyUserRecord {
    /// Stored hash, under the scheme named by `password_alg`.
    pub password: String,
    pub password_alg: String,

    /// Remaining profile fields, carried over verbatim on migration.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// Generated metadata stamped onto every document this crate creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    #[serde(rename = "_id")]
    pub id: String,

    /// Owning collection tag.
    #[serde(rename = "_collection")]
    pub collection: String,

    #[serde(rename = "_created")]
    pub created: DateTime<Utc>,

    #[serde(rename = "_modified")]
    pub modified: DateTime<Utc>,
}

/// User record in the modern schema.
///
/// Built from a legacy record by dropping the password fields and
/// stamping generated metadata; contains no password material by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModernUserRecord {
    pub email: String,

    /// Cleared until the user confirms their address on the new
    /// platform.
    pub verified: bool,

    #[serde(flatten)]
    pub meta: DocMeta,

    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl ModernUserRecord {
    /// Carry a legacy profile over into the modern schema.
    pub fn from_legacy(email: &str, legacy: &LegacyUserRecord, meta: DocMeta) -> Self {
        let mut profile = legacy.profile.clone();
        // strip credential fields if the source map carried them explicitly
        profile.remove("password");
        profile.remove("password_alg");
        Self {
            email: email.to_string(),
            verified: false,
            meta,
            profile,
        }
    }
}
