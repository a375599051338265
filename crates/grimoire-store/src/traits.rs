//! ChainStore trait: the abstract interface for block storage.
//!
//! The ledger is storage-agnostic. The shipped implementation is in-memory
//! (a chain lives for one session); the trait keeps the seam open.

use async_trait::async_trait;
use grimoire_core::{verify_chain, Block, Verification};

use crate::error::Result;

/// Append-only, ordered block storage.
///
/// # Design Notes
///
/// - **Append-only**: blocks are never edited or removed.
/// - **Trusted linkage**: `append` does not re-validate the block. Callers
///   link blocks to the tail before appending; verification is on demand.
/// - **Read-only views**: readers receive owned copies, never references
///   into the stored sequence.
#[async_trait]
pub trait ChainStore: Send + Sync {
    /// Append a block to the end of the chain.
    async fn append(&self, block: Block) -> Result<()>;

    /// The most recently appended block.
    ///
    /// Fails with `EmptyChain` before genesis.
    async fn tail(&self) -> Result<Block>;

    /// A copy of the full chain, in order.
    async fn snapshot(&self) -> Result<Vec<Block>>;

    /// Get the block at `index`.
    async fn get(&self, index: u64) -> Result<Option<Block>>;

    /// Number of blocks stored.
    async fn len(&self) -> Result<usize>;
}

/// Extension trait for common store patterns.
pub trait ChainStoreExt: ChainStore {
    /// Whether no block has been appended yet.
    fn is_empty(&self) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Verify the stored chain.
    fn verify(&self) -> impl std::future::Future<Output = Result<Verification>> + Send;
}

impl<S: ChainStore + ?Sized> ChainStoreExt for S {
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    async fn verify(&self) -> Result<Verification> {
        let chain = self.snapshot().await?;
        Ok(verify_chain(&chain))
    }
}
