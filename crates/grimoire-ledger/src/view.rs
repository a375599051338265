//! Read-only display views of blocks.

use serde::{Deserialize, Serialize};

use grimoire_core::{Block, SealType};

/// What a renderer needs to show one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    pub index: u64,
    pub timestamp: i64,
    pub seal_type: SealType,
    pub hash: String,
    pub previous_hash: String,
    pub architect: String,
    pub mystic: String,
    pub void: String,
    pub synthesis: String,
    pub divergence: f64,
    /// Divergence as a whole percentage, e.g. `"50%"`.
    pub divergence_percent: String,
    /// Divergence above one half.
    pub divergent: bool,
}

impl BlockView {
    /// Build a view with digests cut to `hash_width` hex characters.
    pub fn from_block(block: &Block, hash_width: usize) -> Self {
        Self {
            index: block.index,
            timestamp: block.timestamp,
            seal_type: block.seal_type,
            hash: block.hash.hex_prefix(hash_width),
            previous_hash: block.previous_hash.hex_prefix(hash_width),
            architect: block.data.architect.clone(),
            mystic: block.data.mystic.clone(),
            void: block.data.void.clone(),
            synthesis: block.data.synthesis.clone(),
            divergence: block.data.divergence,
            divergence_percent: format!("{:.0}%", block.data.divergence * 100.0),
            divergent: block.data.is_divergent(),
        }
    }
}
