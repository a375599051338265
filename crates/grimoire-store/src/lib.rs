//! # Grimoire Store
//!
//! Storage abstraction for the Grimoire ledger. Provides a trait-based
//! interface for an append-only block sequence, with an in-memory
//! implementation.
//!
//! ## Key Types
//!
//! - [`ChainStore`] - The async trait for chain storage
//! - [`ChainStoreExt`] - Convenience operations built on the trait
//! - [`MemoryChain`] - In-memory, session-scoped chain
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grimoire_core::Block;
//! use grimoire_store::{ChainStore, MemoryChain};
//!
//! async fn example() {
//!     let store = MemoryChain::new();
//!     store.append(Block::genesis_at(0)).await.unwrap();
//!     let tail = store.tail().await.unwrap();
//!     assert_eq!(tail.index, 0);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Append-only**: no edit or remove operations exist.
//! - **No persistence**: the chain is dropped with the store.
//! - **Serialized writers**: the store does not coordinate "read tail, seal,
//!   append"; the ledger facade does.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryChain;
pub use traits::{ChainStore, ChainStoreExt};
