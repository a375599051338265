//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No genesis block has been appended yet.
    #[error("chain is empty: no genesis block")]
    EmptyChain,

    /// The lock guarding the chain was poisoned by a panicking writer.
    #[error("chain lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
