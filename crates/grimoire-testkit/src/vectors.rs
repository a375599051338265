//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonical hash input and the seal derivation, so
//! any implementation reading the same chain agrees on every digest.

use grimoire_core::{AnalysisRecord, Block, Digest, SealType};
use grimoire_ritual::{derive_seal, SealWidth};

/// A golden block vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub index: u64,
    pub timestamp: i64,
    /// Predecessor hash (hex).
    pub previous_hash: &'static str,
    pub architect: &'static str,
    pub mystic: &'static str,
    pub void: &'static str,
    pub divergence: f64,
    pub synthesis: &'static str,
    /// Expected block hash (hex).
    pub expected_hash: &'static str,
}

const ZERO_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const GENESIS_HEX: &str = "b4abc287c4da42c276dbc3be1b3efa0b40d6615290001df2f102899c44f14c8c";
const BLOCK1_HEX: &str = "23c3223b00d41b6ec6d25308dbe5ecd6c07cf62f1cefc3c1dee658e642cbfa74";

/// Get all golden block vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Default genesis",
            index: 0,
            timestamp: 1736870400000,
            previous_hash: ZERO_HEX,
            architect: "SYSTEM_INIT",
            mystic: "PRIMAM MATERIA",
            void: "NULL",
            divergence: 0.0,
            synthesis: "The Ledger is Opened.",
            expected_hash: GENESIS_HEX,
        },
        GoldenVector {
            name: "First sealed block",
            index: 1,
            timestamp: 1736870401000,
            previous_hash: GENESIS_HEX,
            architect: "a",
            mystic: "m",
            void: "v",
            divergence: 0.5,
            synthesis: "s",
            expected_hash: BLOCK1_HEX,
        },
        GoldenVector {
            name: "First sealed block, divergence changed",
            index: 1,
            timestamp: 1736870401000,
            previous_hash: GENESIS_HEX,
            architect: "a",
            mystic: "m",
            void: "v",
            divergence: 0.6,
            synthesis: "s",
            expected_hash: "9c9c4bb10d59c503042bddff5fa11d5bfe2e19850642a67ca0565dbacbcb98ab",
        },
        GoldenVector {
            name: "Escaped text and inexact divergence",
            index: 2,
            timestamp: 1736870402000,
            previous_hash: BLOCK1_HEX,
            architect: "line\nbreak",
            mystic: "quote \"x\"",
            void: "\u{e9}",
            divergence: 0.1 + 0.2,
            synthesis: "tab\t",
            expected_hash: "977e7fc868ca15dedc3ccbcb30c4aafc42c1167b049df39d64597467717cf409",
        },
        GoldenVector {
            name: "Empty text at the epoch",
            index: 0,
            timestamp: 0,
            previous_hash: ZERO_HEX,
            architect: "",
            mystic: "",
            void: "",
            divergence: 1.0,
            synthesis: "",
            expected_hash: "d8b2ed5a427a101211e36a49b4c1532d4e605b4fb996a7b6f5bb1e413a8c27c1",
        },
        GoldenVector {
            // Hashed as `0.0000001`, never `1e-7`.
            name: "Tiny divergence without exponent",
            index: 1,
            timestamp: 1736870401000,
            previous_hash: GENESIS_HEX,
            architect: "a",
            mystic: "m",
            void: "v",
            divergence: 1e-7,
            synthesis: "s",
            expected_hash: "088a4eb49a9979c3ac8d9412484d15a0aa570a2851405cc4f5301a8de1ca325a",
        },
    ]
}

/// Build the record carried by a vector.
pub fn record_from_vector(vector: &GoldenVector) -> AnalysisRecord {
    AnalysisRecord::new(
        vector.architect,
        vector.mystic,
        vector.void,
        vector.divergence,
        vector.synthesis,
    )
}

/// Build the block a vector describes, with its hash computed.
pub fn block_from_vector(vector: &GoldenVector) -> Block {
    // Vectors carry valid hex; a bad literal fails the comparison instead.
    let previous_hash = Digest::from_hex(vector.previous_hash).unwrap_or(Digest::ZERO);
    let mut block = Block {
        index: vector.index,
        timestamp: vector.timestamp,
        previous_hash,
        hash: Digest::ZERO,
        data: record_from_vector(vector),
        seal_type: SealType::for_index(vector.index),
    };
    block.hash = block.compute_hash();
    block
}

/// Verify all golden vectors.
///
/// Returns `(name, passed, computed_hex)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let computed = block_from_vector(v).hash.to_hex();
            (v.name.to_string(), computed == v.expected_hash, computed)
        })
        .collect()
}

/// A golden seal vector.
#[derive(Debug, Clone)]
pub struct SealVector {
    pub name: &'static str,
    pub role: &'static str,
    pub label: &'static str,
    pub epoch: &'static str,
    pub resonance: f64,
    pub salt_ms: i64,
    pub width: usize,
    /// Expected seal text.
    pub expected: &'static str,
}

/// Get all golden seal vectors.
pub fn seal_vectors() -> Vec<SealVector> {
    vec![
        SealVector {
            name: "Full-width giant seal",
            role: "GIANT",
            label: "ORACLE",
            epoch: "TRANSCENDENT",
            resonance: 1.005,
            salt_ms: 1736870400000,
            width: 64,
            expected: "2f3e0453e8e0c731686c01171dc9ffca26eb16ce0d78d598d6dc93bcec034ed7",
        },
        SealVector {
            name: "Giant aspect seal",
            role: "GIANT",
            label: "ORACLE",
            epoch: "TRANSCENDENT",
            resonance: 1.005,
            salt_ms: 1736870400000,
            width: 24,
            expected: "2f3e0453e8e0c731686c0117",
        },
        SealVector {
            name: "Legion aspect seal",
            role: "LEGION",
            label: "ASCENT",
            epoch: "SYNTROPIC",
            resonance: 0.9,
            salt_ms: 1736870400000,
            width: 24,
            expected: "07b1ee037fa160962e6d75d2",
        },
    ]
}

/// Verify all seal vectors. Same shape as [`verify_all_vectors`].
pub fn verify_seal_vectors() -> Vec<(String, bool, String)> {
    seal_vectors()
        .iter()
        .map(|v| {
            let computed = match SealWidth::new(v.width) {
                Ok(width) => derive_seal(v.role, v.label, v.epoch, v.resonance, v.salt_ms, width)
                    .as_str()
                    .to_string(),
                Err(e) => e.to_string(),
            };
            (v.name.to_string(), computed == v.expected, computed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_core::is_chain_valid;

    #[test]
    fn test_vectors_deterministic() {
        for vector in all_vectors() {
            let b1 = block_from_vector(&vector);
            let b2 = block_from_vector(&vector);
            assert_eq!(b1.hash, b2.hash, "Vector '{}' not deterministic", vector.name);
        }
    }

    #[test]
    fn test_all_vectors_pass() {
        for (name, passed, computed) in verify_all_vectors() {
            assert!(passed, "Vector '{name}' computed {computed}");
        }
    }

    #[test]
    fn test_all_seal_vectors_pass() {
        for (name, passed, computed) in verify_seal_vectors() {
            assert!(passed, "Seal vector '{name}' computed {computed}");
        }
    }

    #[test]
    fn test_vectors_form_a_chain() {
        let vectors = all_vectors();
        let chain: Vec<Block> = [0, 1, 3].iter().map(|&i| block_from_vector(&vectors[i])).collect();
        assert!(is_chain_valid(&chain));
    }

    #[test]
    fn test_vector_matches_seal_at() {
        let vectors = all_vectors();
        let genesis = Block::genesis_at(vectors[0].timestamp);
        assert_eq!(genesis, block_from_vector(&vectors[0]));

        let block = Block::seal_at(&genesis, record_from_vector(&vectors[1]), vectors[1].timestamp);
        assert_eq!(block, block_from_vector(&vectors[1]));
    }

    #[test]
    fn test_genesis_vectors_use_zero_sentinel() {
        for vector in all_vectors().iter().filter(|v| v.index == 0) {
            assert_eq!(block_from_vector(vector).previous_hash, Digest::ZERO);
        }
    }
}
