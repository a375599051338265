//! # Grimoire Ledger
//!
//! The unified API for the Grimoire chain: a session-scoped, hash-linked,
//! append-only log of analysis records.
//!
//! ## Overview
//!
//! - **Blocks**: immutable entries, each bound to its predecessor by SHA-256
//! - **Chain**: opened with a genesis block, grown only by append
//! - **Verification**: recomputes every digest and link on demand
//! - **Seals**: decorative archetype fingerprints sharing the same digest
//!
//! ## Key Concepts
//!
//! - **Single writer**: appends are serialized; two seals never share a tail.
//! - **Tamper evidence**: any edit to a block breaks verification at that
//!   block. Nothing is repaired automatically.
//! - **Session scope**: nothing is persisted; the chain ends with the ledger.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grimoire_ledger::{AnalysisRecord, Ledger, LedgerConfig};
//! use grimoire_ledger::store::MemoryChain;
//!
//! async fn example() {
//!     let ledger = Ledger::open(MemoryChain::new(), LedgerConfig::default())
//!         .await
//!         .unwrap();
//!
//!     let block = ledger
//!         .seal(AnalysisRecord::new("a", "m", "v", 0.5, "s"))
//!         .await
//!         .unwrap();
//!     assert_eq!(block.index, 1);
//!
//!     assert!(ledger.is_valid().await.unwrap());
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `grimoire_ledger::core` - Core primitives (Block, Digest, verifier)
//! - `grimoire_ledger::store` - Chain storage
//! - `grimoire_ledger::ritual` - Archetype seals and numerology

pub mod config;
pub mod error;
pub mod ledger;
pub mod view;

// Re-export component crates
pub use grimoire_core as core;
pub use grimoire_ritual as ritual;
pub use grimoire_store as store;

// Re-export main types for convenience
pub use config::LedgerConfig;
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use view::BlockView;

// Re-export commonly used core types
pub use grimoire_core::{
    create_genesis_block, is_chain_valid, seal_block, verify_chain, AnalysisRecord, Block,
    Digest, IntegrityViolation, SealType, Verification, ViolationKind,
};
