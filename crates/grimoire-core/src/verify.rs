//! Chain verification: linkage and content integrity.
//!
//! The verifier walks the chain once, front to back, holding only the
//! previous block. It stops at the first violation and reports where the
//! chain broke. Failures are returned as values, never raised: a compromised
//! chain stays inspectable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::{Block, SealType};
use crate::digest::Digest;

/// Which invariant a block broke.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ViolationKind {
    #[error("stored hash {stored} does not match recomputed hash {computed}")]
    HashMismatch { stored: Digest, computed: Digest },

    #[error("previous hash {found} does not match predecessor hash {expected}")]
    BrokenLink { expected: Digest, found: Digest },

    #[error("expected index {expected}, found {found}")]
    IndexOutOfOrder { expected: u64, found: u64 },

    #[error("genesis previous hash must be the zero sentinel, found {found}")]
    GenesisMalformed { found: Digest },

    #[error("expected seal type {expected:?}, found {found:?}")]
    SealTypeMismatch { expected: SealType, found: SealType },

    #[error("predecessor index {previous} has no successor")]
    IndexOverflow { previous: u64 },
}

/// The first point at which a chain fails verification.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("integrity violation at block {index}: {kind}")]
pub struct IntegrityViolation {
    /// Position in the chain of the offending block.
    pub index: u64,
    /// The broken invariant.
    pub kind: ViolationKind,
}

/// Verdict over a whole chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verification {
    /// Every block passed every check.
    Intact {
        /// Number of blocks checked.
        length: usize,
    },
    /// The chain is invalid from the reported block onward.
    Compromised(IntegrityViolation),
}

impl Verification {
    /// Check if the chain is intact.
    pub fn is_intact(&self) -> bool {
        matches!(self, Verification::Intact { .. })
    }

    /// The violation, if any.
    pub fn violation(&self) -> Option<&IntegrityViolation> {
        match self {
            Verification::Intact { .. } => None,
            Verification::Compromised(v) => Some(v),
        }
    }

    /// Convert to a `Result` carrying the verified length.
    pub fn into_result(self) -> Result<usize, IntegrityViolation> {
        match self {
            Verification::Intact { length } => Ok(length),
            Verification::Compromised(v) => Err(v),
        }
    }
}

/// Verify a whole chain, stopping at the first violation.
///
/// Runs in O(n) time and holds only the preceding block. An empty chain is
/// trivially intact.
pub fn verify_chain<'a, I>(chain: I) -> Verification
where
    I: IntoIterator<Item = &'a Block>,
{
    let mut previous: Option<&Block> = None;
    let mut length = 0usize;

    for block in chain {
        if let Err(violation) = check_block(previous, block, length as u64) {
            return Verification::Compromised(violation);
        }
        previous = Some(block);
        length += 1;
    }

    Verification::Intact { length }
}

/// Boolean form of [`verify_chain`].
pub fn is_chain_valid<'a, I>(chain: I) -> bool
where
    I: IntoIterator<Item = &'a Block>,
{
    verify_chain(chain).is_intact()
}

/// Check that `next` is a valid successor of `previous`.
pub fn verify_link(previous: &Block, next: &Block) -> Result<(), IntegrityViolation> {
    let Some(expected_index) = previous.index.checked_add(1) else {
        return Err(IntegrityViolation {
            index: next.index,
            kind: ViolationKind::IndexOverflow {
                previous: previous.index,
            },
        });
    };
    check_block(Some(previous), next, expected_index)
}

/// Check the parts of `block` that need no predecessor: its seal type and
/// its own hash.
///
/// Used on the tail before sealing onto it.
pub fn verify_block(block: &Block) -> Result<(), IntegrityViolation> {
    let fail = |kind| IntegrityViolation {
        index: block.index,
        kind,
    };

    let expected_seal = SealType::for_index(block.index);
    if block.seal_type != expected_seal {
        return Err(fail(ViolationKind::SealTypeMismatch {
            expected: expected_seal,
            found: block.seal_type,
        }));
    }

    let computed = block.compute_hash();
    if computed != block.hash {
        return Err(fail(ViolationKind::HashMismatch {
            stored: block.hash,
            computed,
        }));
    }

    Ok(())
}

fn check_block(
    previous: Option<&Block>,
    block: &Block,
    expected_index: u64,
) -> Result<(), IntegrityViolation> {
    let fail = |kind| IntegrityViolation {
        index: expected_index,
        kind,
    };

    // 1. Position
    if block.index != expected_index {
        return Err(fail(ViolationKind::IndexOutOfOrder {
            expected: expected_index,
            found: block.index,
        }));
    }

    // 2. Seal type matches position
    let expected_seal = SealType::for_index(expected_index);
    if block.seal_type != expected_seal {
        return Err(fail(ViolationKind::SealTypeMismatch {
            expected: expected_seal,
            found: block.seal_type,
        }));
    }

    // 3. Linkage
    match previous {
        None => {
            if !block.previous_hash.is_zero() {
                return Err(fail(ViolationKind::GenesisMalformed {
                    found: block.previous_hash,
                }));
            }
        }
        Some(prev) => {
            if block.previous_hash != prev.hash {
                return Err(fail(ViolationKind::BrokenLink {
                    expected: prev.hash,
                    found: block.previous_hash,
                }));
            }
        }
    }

    // 4. Content
    let computed = block.compute_hash();
    if computed != block.hash {
        return Err(fail(ViolationKind::HashMismatch {
            stored: block.hash,
            computed,
        }));
    }

    Ok(())
}
