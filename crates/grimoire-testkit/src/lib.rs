//! # Grimoire Testkit
//!
//! Testing utilities for the Grimoire ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known blocks and seals with their expected digests
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic chains, stores and tamper helpers
//!
//! ## Golden Vectors
//!
//! ```rust
//! use grimoire_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed, hash) in verify_all_vectors() {
//!     assert!(passed, "{name}: {hash}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use grimoire_testkit::generators::{chain_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn generated_chains_verify(params: ChainParams) {
//!         prop_assert!(grimoire_core::is_chain_valid(&chain_from_params(&params)));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use grimoire_testkit::fixtures::ChainFixture;
//!
//! let chain = ChainFixture::new().chain(3);
//! assert_eq!(chain.len(), 4);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{example_record, tamperings, ChainFixture};
pub use generators::{chain_from_params, ChainParams};
pub use vectors::{all_vectors, block_from_vector, verify_all_vectors, GoldenVector};
