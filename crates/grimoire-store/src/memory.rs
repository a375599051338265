//! In-memory implementation of the ChainStore trait.
//!
//! A chain lives for one session and is discarded on drop.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use grimoire_core::Block;

use crate::error::{Result, StoreError};
use crate::traits::ChainStore;

/// In-memory chain. Thread-safe via RwLock.
#[derive(Debug, Default)]
pub struct MemoryChain {
    blocks: RwLock<Vec<Block>>,
}

impl MemoryChain {
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Block>>> {
        self.blocks.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Block>>> {
        self.blocks.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl ChainStore for MemoryChain {
    async fn append(&self, block: Block) -> Result<()> {
        let mut blocks = self.write()?;
        tracing::debug!(index = block.index, hash = %block.hash, "appending block");
        blocks.push(block);
        Ok(())
    }

    async fn tail(&self) -> Result<Block> {
        let blocks = self.read()?;
        blocks.last().cloned().ok_or(StoreError::EmptyChain)
    }

    async fn snapshot(&self) -> Result<Vec<Block>> {
        let blocks = self.read()?;
        Ok(blocks.clone())
    }

    async fn get(&self, index: u64) -> Result<Option<Block>> {
        let blocks = self.read()?;
        Ok(usize::try_from(index)
            .ok()
            .and_then(|i| blocks.get(i))
            .cloned())
    }

    async fn len(&self) -> Result<usize> {
        let blocks = self.read()?;
        Ok(blocks.len())
    }
}
