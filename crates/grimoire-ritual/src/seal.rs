//! Seal derivation: decorative fingerprints over labeled inputs.
//!
//! Seals share the ledger's digest and number formatting but carry no chain
//! linkage. They are display identifiers, not integrity anchors.

use serde::{Deserialize, Serialize};
use std::fmt;

use grimoire_core::{canonical_number, Digest, DIGEST_HEX_LEN};

use crate::error::{Result, RitualError};

/// Shortest permitted seal, in hex characters.
pub const MIN_SEAL_WIDTH: usize = 16;

/// A fixed seal width between 16 and 64 hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SealWidth(usize);

impl SealWidth {
    /// Width used for archetype awakening seals.
    pub const AWAKENING: Self = Self(16);
    /// Width used for aspect and master seals.
    pub const ASPECT: Self = Self(24);
    /// The untruncated digest.
    pub const FULL: Self = Self(DIGEST_HEX_LEN);

    /// Validate a width.
    pub fn new(width: usize) -> Result<Self> {
        if (MIN_SEAL_WIDTH..=DIGEST_HEX_LEN).contains(&width) {
            Ok(Self(width))
        } else {
            Err(RitualError::InvalidSealWidth(width))
        }
    }

    /// The width in hex characters.
    pub fn get(self) -> usize {
        self.0
    }
}

/// A lowercase hex fingerprint of fixed width.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seal(String);

impl Seal {
    /// Truncate a digest to `width` hex characters.
    pub fn from_digest(digest: &Digest, width: SealWidth) -> Self {
        Self(digest.hex_prefix(width.get()))
    }

    /// The hex text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width in hex characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the seal holds no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_raw(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Debug for Seal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seal({})", self.0)
    }
}

impl fmt::Display for Seal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Seal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the canonical seal input: `ROLE:label:epoch:resonance:timestamp`.
pub fn seal_input(role: &str, label: &str, epoch_tag: &str, resonance: f64, salt_ms: i64) -> String {
    format!(
        "{}:{}:{}:{}:{}",
        role,
        label,
        epoch_tag,
        canonical_number(resonance),
        salt_ms
    )
}

/// Derive a seal.
///
/// The timestamp salts the input, so repeated calls with the same labels at
/// different instants yield different seals.
pub fn derive_seal(
    role: &str,
    label: &str,
    epoch_tag: &str,
    resonance: f64,
    salt_ms: i64,
    width: SealWidth,
) -> Seal {
    let input = seal_input(role, label, epoch_tag, resonance, salt_ms);
    Seal::from_digest(&Digest::hash_str(&input), width)
}
