//! Block: one immutable entry in the ledger.
//!
//! A block binds an analysis record to its predecessor by digest. Once
//! created it is never edited; changes are new blocks.

use serde::{Deserialize, Serialize};

use crate::canonical::block_hash_input;
use crate::digest::Digest;
use crate::error::CoreError;
use crate::record::AnalysisRecord;
use crate::types::now_millis;

/// How a block was sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SealType {
    /// The anchor of the chain (index 0).
    Genesis,
    /// Every block after genesis.
    Sealed,
}

impl SealType {
    /// The seal type a block at `index` must carry.
    pub fn for_index(index: u64) -> Self {
        if index == 0 {
            Self::Genesis
        } else {
            Self::Sealed
        }
    }

    /// Label used in displays.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Genesis => "GENESIS",
            Self::Sealed => "SEALED",
        }
    }
}

/// A sealed ledger block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Position in the chain, starting at 0.
    pub index: u64,

    /// Creation time (Unix milliseconds).
    pub timestamp: i64,

    /// Hash of the preceding block; [`Digest::ZERO`] for genesis.
    pub previous_hash: Digest,

    /// Hash over `(index, timestamp, previous_hash, data)`.
    pub hash: Digest,

    /// The sealed record.
    pub data: AnalysisRecord,

    /// `Genesis` at index 0, `Sealed` elsewhere.
    pub seal_type: SealType,
}

impl Block {
    /// Build the genesis block with an explicit timestamp.
    pub fn genesis_at(timestamp: i64) -> Self {
        Self::genesis_with_record_at(AnalysisRecord::genesis(), timestamp)
    }

    /// Build a genesis block carrying a custom initialization record.
    pub fn genesis_with_record_at(data: AnalysisRecord, timestamp: i64) -> Self {
        Self::build(0, timestamp, Digest::ZERO, data)
    }

    /// Seal `data` after `previous` with an explicit timestamp.
    ///
    /// Pure: identical inputs always produce the identical hash.
    ///
    /// # Panics
    ///
    /// If `previous.index` is `u64::MAX`. Use [`Block::checked_seal_at`] for
    /// predecessors that did not come from this crate's constructors.
    pub fn seal_at(previous: &Block, data: AnalysisRecord, timestamp: i64) -> Self {
        match Self::checked_seal_at(previous, data, timestamp) {
            Ok(block) => block,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`Block::seal_at`], but fails instead of overflowing the index.
    pub fn checked_seal_at(
        previous: &Block,
        data: AnalysisRecord,
        timestamp: i64,
    ) -> Result<Self, CoreError> {
        let index = previous
            .index
            .checked_add(1)
            .ok_or(CoreError::IndexOverflow(previous.index))?;
        Ok(Self::build(index, timestamp, previous.hash, data))
    }

    fn build(index: u64, timestamp: i64, previous_hash: Digest, data: AnalysisRecord) -> Self {
        let hash = Digest::hash_str(&block_hash_input(index, timestamp, &previous_hash, &data));
        Self {
            index,
            timestamp,
            previous_hash,
            hash,
            data,
            seal_type: SealType::for_index(index),
        }
    }

    /// The exact string this block's hash is computed over.
    pub fn hash_input(&self) -> String {
        block_hash_input(self.index, self.timestamp, &self.previous_hash, &self.data)
    }

    /// Recompute the hash from the block's own fields.
    pub fn compute_hash(&self) -> Digest {
        Digest::hash_str(&self.hash_input())
    }

    /// Whether the stored hash matches the recomputed one.
    pub fn is_self_consistent(&self) -> bool {
        self.compute_hash() == self.hash
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.seal_type == SealType::Genesis
    }
}

/// Create a genesis block stamped with the current time.
pub fn create_genesis_block() -> Block {
    Block::genesis_at(now_millis())
}

/// Seal a record after `previous`, stamped with the current time.
///
/// Does not append anywhere; the caller owns placement.
pub fn seal_block(previous: &Block, data: AnalysisRecord) -> Block {
    Block::seal_at(previous, data, now_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: i64 = 1736870400000;

    #[test]
    fn test_genesis_shape() {
        let genesis = Block::genesis_at(TS);
        assert_eq!(genesis.index, 0);
        assert_eq!(genesis.seal_type, SealType::Genesis);
        assert_eq!(genesis.previous_hash, Digest::ZERO);
        assert_eq!(genesis.data, AnalysisRecord::genesis());
        assert!(genesis.is_genesis());
        assert!(genesis.is_self_consistent());
    }

    #[test]
    fn test_genesis_golden_hash() {
        let genesis = Block::genesis_at(TS);
        assert_eq!(
            genesis.hash.to_hex(),
            "b4abc287c4da42c276dbc3be1b3efa0b40d6615290001df2f102899c44f14c8c"
        );
    }

    #[test]
    fn test_seal_links_to_previous() {
        let genesis = Block::genesis_at(TS);
        let block = Block::seal_at(&genesis, AnalysisRecord::new("a", "m", "v", 0.5, "s"), TS + 1000);
        assert_eq!(block.index, 1);
        assert_eq!(block.previous_hash, genesis.hash);
        assert_eq!(block.seal_type, SealType::Sealed);
        assert_eq!(
            block.hash.to_hex(),
            "23c3223b00d41b6ec6d25308dbe5ecd6c07cf62f1cefc3c1dee658e642cbfa74"
        );
    }

    #[test]
    fn test_seal_is_pure() {
        let genesis = Block::genesis_at(TS);
        let data = AnalysisRecord::new("x", "y", "z", 0.25, "w");
        let b1 = Block::seal_at(&genesis, data.clone(), TS + 5);
        let b2 = Block::seal_at(&genesis, data, TS + 5);
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_timestamp_changes_hash() {
        let genesis = Block::genesis_at(TS);
        let data = AnalysisRecord::new("x", "y", "z", 0.25, "w");
        let b1 = Block::seal_at(&genesis, data.clone(), TS + 5);
        let b2 = Block::seal_at(&genesis, data, TS + 6);
        assert_ne!(b1.hash, b2.hash);
    }

    #[test]
    fn test_checked_seal_at_index_limit() {
        let mut last = Block::genesis_at(TS);
        last.index = u64::MAX;
        let data = AnalysisRecord::new("a", "m", "v", 0.5, "s");

        let err = Block::checked_seal_at(&last, data.clone(), TS + 1).unwrap_err();
        assert!(matches!(err, CoreError::IndexOverflow(u64::MAX)));

        last.index = u64::MAX - 1;
        let block = Block::checked_seal_at(&last, data, TS + 1).unwrap();
        assert_eq!(block.index, u64::MAX);
    }

    #[test]
    #[should_panic(expected = "index space exhausted")]
    fn test_seal_at_panics_at_index_limit() {
        let mut last = Block::genesis_at(TS);
        last.index = u64::MAX;
        Block::seal_at(&last, AnalysisRecord::default(), TS + 1);
    }

    #[test]
    fn test_now_constructors() {
        let genesis = create_genesis_block();
        let block = seal_block(&genesis, AnalysisRecord::new("a", "b", "c", 0.1, "d"));
        assert!(block.timestamp >= genesis.timestamp);
        assert!(block.is_self_consistent());
    }

    #[test]
    fn test_serde_shape() {
        let genesis = Block::genesis_at(TS);
        let json = serde_json::to_value(&genesis).unwrap();
        assert_eq!(json["index"], 0);
        assert_eq!(json["sealType"], "GENESIS");
        assert_eq!(json["previousHash"], "0".repeat(64));
        assert_eq!(json["data"]["mystic"], "PRIMAM MATERIA");

        let back: Block = serde_json::from_value(json).unwrap();
        assert_eq!(back, genesis);
    }
}
