//! The Ledger: unified API for the Grimoire chain.
//!
//! The Ledger owns a chain store for one session. It opens the chain with a
//! genesis block, serializes "read tail, seal, append" so concurrent callers
//! never link to the same tail, and verifies the chain on demand.

use std::sync::Arc;

use tokio::sync::Mutex;

use grimoire_core::{
    now_millis, verify_block, verify_chain, AnalysisRecord, Block, Digest, Verification,
};
use grimoire_store::ChainStore;

use crate::config::LedgerConfig;
use crate::error::Result;
use crate::view::BlockView;

/// The main Ledger struct.
///
/// Provides a unified API for:
/// - Opening a session chain with its genesis block
/// - Sealing analysis records onto the tail
/// - Reading snapshots and display views
/// - Verifying chain integrity
pub struct Ledger<S: ChainStore> {
    /// The storage backend.
    store: Arc<S>,
    /// Configuration.
    config: LedgerConfig,
    /// Held across "read tail, seal, append".
    append_lock: Mutex<()>,
}

impl<S: ChainStore> Ledger<S> {
    /// Open a ledger over `store`.
    ///
    /// Runs the digest self-test first and refuses to open if it fails. An
    /// empty store receives a genesis block; a populated one is adopted as is.
    pub async fn open(store: S, config: LedgerConfig) -> Result<Self> {
        Digest::self_test()?;

        let ledger = Self {
            store: Arc::new(store),
            config,
            append_lock: Mutex::new(()),
        };

        let existing = ledger.store.len().await?;
        if existing == 0 {
            let genesis = Block::genesis_with_record_at(
                ledger.config.genesis_record.clone(),
                now_millis(),
            );
            tracing::info!(hash = %genesis.hash, "ledger opened");
            ledger.store.append(genesis).await?;
        } else {
            tracing::info!(length = existing, "ledger adopted existing chain");
        }

        Ok(ledger)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Seal a record onto the chain, stamped with the current time.
    ///
    /// With `verify_tail` set, a tail whose own hash or seal type is wrong is
    /// refused with [`crate::LedgerError::Integrity`] and nothing is appended.
    pub async fn seal(&self, data: AnalysisRecord) -> Result<Block> {
        let _guard = self.append_lock.lock().await;
        self.seal_locked(data, now_millis()).await
    }

    /// Seal a record with an explicit timestamp.
    pub async fn seal_at(&self, data: AnalysisRecord, timestamp: i64) -> Result<Block> {
        let _guard = self.append_lock.lock().await;
        self.seal_locked(data, timestamp).await
    }

    async fn seal_locked(&self, data: AnalysisRecord, timestamp: i64) -> Result<Block> {
        let tail = self.store.tail().await?;

        if self.config.verify_tail {
            if let Err(violation) = verify_block(&tail) {
                tracing::warn!(index = violation.index, %violation, "refusing to seal onto tail");
                return Err(violation.into());
            }
        }

        let block = Block::checked_seal_at(&tail, data, timestamp)?;

        tracing::debug!(index = block.index, hash = %block.hash, "sealed block");
        self.store.append(block.clone()).await?;
        Ok(block)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The most recent block.
    pub async fn tail(&self) -> Result<Block> {
        Ok(self.store.tail().await?)
    }

    /// A read-only copy of the whole chain.
    pub async fn snapshot(&self) -> Result<Vec<Block>> {
        Ok(self.store.snapshot().await?)
    }

    /// Get the block at `index`.
    pub async fn get(&self, index: u64) -> Result<Option<Block>> {
        Ok(self.store.get(index).await?)
    }

    /// Number of blocks, genesis included.
    pub async fn len(&self) -> Result<usize> {
        Ok(self.store.len().await?)
    }

    /// Display views of every block, digests cut to the configured width.
    pub async fn views(&self) -> Result<Vec<BlockView>> {
        let width = self.config.display_hash_width;
        Ok(self
            .store
            .snapshot()
            .await?
            .iter()
            .map(|b| BlockView::from_block(b, width))
            .collect())
    }

    /// Short prefix of the tail hash, for headers.
    pub async fn latest_hash_prefix(&self) -> Result<String> {
        let tail = self.store.tail().await?;
        Ok(tail.hash.hex_prefix(self.config.display_hash_width))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify the whole chain.
    ///
    /// A compromised chain is reported, never repaired, and stays readable.
    pub async fn verify(&self) -> Result<Verification> {
        let chain = self.store.snapshot().await?;
        let verdict = verify_chain(&chain);
        match &verdict {
            Verification::Intact { length } => {
                tracing::debug!(length, "chain verified");
            }
            Verification::Compromised(violation) => {
                tracing::warn!(index = violation.index, %violation, "chain compromised");
            }
        }
        Ok(verdict)
    }

    /// Boolean form of [`Ledger::verify`].
    pub async fn is_valid(&self) -> Result<bool> {
        Ok(self.verify().await?.is_intact())
    }
}
