//! # Grimoire Core
//!
//! Pure primitives for the Grimoire ledger: digests, blocks, canonicalization,
//! and chain verification.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! hash-linked data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable, hash-linked ledger entry
//! - [`Digest`] - SHA-256 digest used for block hashes and seals
//! - [`AnalysisRecord`] - The opaque payload a block carries
//! - [`Verification`] - Verdict of walking a chain
//!
//! ## Canonicalization
//!
//! Block hashes cover a fixed canonical string. See [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod record;
pub mod types;
pub mod verify;

pub use block::{create_genesis_block, seal_block, Block, SealType};
pub use canonical::{block_hash_input, canonical_number, canonical_record};
pub use digest::{Digest, DIGEST_HEX_LEN, DIGEST_LEN};
pub use error::CoreError;
pub use record::AnalysisRecord;
pub use types::now_millis;
pub use verify::{
    is_chain_valid, verify_block, verify_chain, verify_link, IntegrityViolation, Verification,
    ViolationKind,
};
