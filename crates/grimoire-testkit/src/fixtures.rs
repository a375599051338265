//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grimoire_core::{AnalysisRecord, Block};
use grimoire_store::{ChainStore, MemoryChain, Result};

/// Fixed base timestamp used by deterministic fixtures (2025-01-14T16:00:00Z).
pub const BASE_TIMESTAMP: i64 = 1736870400000;

/// Spacing between fixture block timestamps.
pub const BLOCK_INTERVAL_MS: i64 = 1000;

/// Builds deterministic chains and records.
pub struct ChainFixture {
    rng: StdRng,
}

impl ChainFixture {
    /// Create a fixture with a fixed seed.
    pub fn new() -> Self {
        Self::with_seed(0x42)
    }

    /// Create a fixture with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A record with random text and a divergence in `[0, 1)`.
    pub fn random_record(&mut self) -> AnalysisRecord {
        AnalysisRecord::new(
            self.random_text(12),
            self.random_text(12),
            self.random_text(12),
            self.rng.gen::<f64>(),
            self.random_text(24),
        )
    }

    fn random_text(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// A valid chain of genesis plus `sealed` blocks, one second apart.
    pub fn chain(&mut self, sealed: usize) -> Vec<Block> {
        let mut chain = Vec::with_capacity(sealed + 1);
        let mut tail = Block::genesis_at(BASE_TIMESTAMP);
        chain.push(tail.clone());
        for i in 1..=sealed {
            let record = self.random_record();
            tail = Block::seal_at(&tail, record, BASE_TIMESTAMP + BLOCK_INTERVAL_MS * i as i64);
            chain.push(tail.clone());
        }
        chain
    }

    /// A memory store preloaded with [`ChainFixture::chain`].
    pub async fn store(&mut self, sealed: usize) -> Result<MemoryChain> {
        let store = MemoryChain::new();
        for block in self.chain(sealed) {
            store.append(block).await?;
        }
        Ok(store)
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The record used throughout the ledger's worked example.
pub fn example_record() -> AnalysisRecord {
    AnalysisRecord::new("a", "m", "v", 0.5, "s")
}

/// Every single-field tampering of the block at `index`.
///
/// Each returned chain differs from `chain` in exactly one field of one
/// block.
pub fn tamperings(chain: &[Block], index: usize) -> Vec<(&'static str, Vec<Block>)> {
    let mut out = Vec::new();
    let mut push = |name: &'static str, f: &dyn Fn(&mut Block)| {
        let mut copy = chain.to_vec();
        f(&mut copy[index]);
        out.push((name, copy));
    };

    push("timestamp", &|b: &mut Block| b.timestamp += 1);
    push("architect", &|b: &mut Block| b.data.architect.push('x'));
    push("mystic", &|b: &mut Block| b.data.mystic.push('x'));
    push("void", &|b: &mut Block| b.data.void.push('x'));
    push("synthesis", &|b: &mut Block| b.data.synthesis.push('x'));
    push("divergence", &|b: &mut Block| b.data.divergence += 0.1);
    push("previous_hash", &|b: &mut Block| b.previous_hash.0[0] ^= 0xff);
    push("hash", &|b: &mut Block| b.hash.0[31] ^= 0x01);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_core::is_chain_valid;
    use grimoire_store::ChainStoreExt;

    #[test]
    fn test_fixture_chain_is_valid() {
        let chain = ChainFixture::new().chain(5);
        assert_eq!(chain.len(), 6);
        assert!(is_chain_valid(&chain));
    }

    #[test]
    fn test_fixture_deterministic() {
        let a = ChainFixture::with_seed(7).chain(3);
        let b = ChainFixture::with_seed(7).chain(3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tamperings_change_one_block() {
        let chain = ChainFixture::new().chain(2);
        for (name, tampered) in tamperings(&chain, 1) {
            assert_ne!(tampered[1], chain[1], "{name} did not change the block");
            assert_eq!(tampered[0], chain[0]);
            assert_eq!(tampered[2], chain[2]);
        }
    }

    #[tokio::test]
    async fn test_fixture_store() {
        let store = ChainFixture::new().store(4).await.unwrap();
        assert_eq!(store.len().await.unwrap(), 5);
        assert!(store.verify().await.unwrap().is_intact());
    }
}
