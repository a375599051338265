//! SHA-256 digests with a strong type.
//!
//! Every hash in the ledger (block hashes, previous-hash links, seal
//! fingerprints) is produced here, so the whole crate shares one primitive.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use std::fmt;

use crate::error::CoreError;

/// Width of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Width of a digest rendered as lowercase hex.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Known-answer vector for the startup self-test: SHA-256("abc").
const SELF_TEST_INPUT: &[u8] = b"abc";
const SELF_TEST_EXPECTED: &str =
    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// A 32-byte SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    /// Compute the SHA-256 digest of the given data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Compute the digest of a canonical string (hashed as its UTF-8 bytes).
    pub fn hash_str(input: &str) -> Self {
        Self::hash(input.as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != DIGEST_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// First `width` hex characters, for display.
    ///
    /// Widths beyond the digest are clamped.
    pub fn hex_prefix(&self, width: usize) -> String {
        let mut hex = self.to_hex();
        hex.truncate(width.min(DIGEST_HEX_LEN));
        hex
    }

    /// Check whether this is the all-zero sentinel.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Run a known-answer test against the hash primitive.
    ///
    /// The ledger refuses to open when this fails.
    pub fn self_test() -> Result<(), CoreError> {
        let got = Self::hash(SELF_TEST_INPUT).to_hex();
        if got != SELF_TEST_EXPECTED {
            return Err(CoreError::DigestUnavailable(format!(
                "sha-256 known-answer test failed: got {got}"
            )));
        }
        Ok(())
    }

    /// The zero digest. Used as the genesis block's previous hash.
    pub const ZERO: Self = Self([0u8; DIGEST_LEN]);
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(de::Error::custom)
    }
}
