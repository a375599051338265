//! Error types for the Ledger.

use grimoire_core::{CoreError, IntegrityViolation};
use grimoire_ritual::RitualError;
use grimoire_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Core primitive error (including an unavailable digest at startup).
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(StoreError),

    /// Ritual error.
    #[error("ritual error: {0}")]
    Ritual(#[from] RitualError),

    /// Sealing was attempted before a genesis block exists.
    #[error("chain is empty: reinitialize the ledger")]
    EmptyChain,

    /// The tail failed its integrity check; nothing was sealed onto it.
    #[error("refused to seal: {0}")]
    Integrity(#[from] IntegrityViolation),

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<StoreError> for LedgerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmptyChain => LedgerError::EmptyChain,
            other => LedgerError::Store(other),
        }
    }
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
