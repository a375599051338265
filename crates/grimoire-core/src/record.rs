//! The analysis record carried by each block.

use serde::{Deserialize, Serialize};

/// An opaque analysis record supplied by the caller.
///
/// The ledger never interprets these fields. Only their canonical encoding
/// (see [`crate::canonical`]) flows into the block hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// The engineering view.
    pub architect: String,
    /// The esoteric view.
    pub mystic: String,
    /// The entropic view.
    pub void: String,
    /// Variance between the three views, nominally in `[0, 1]`.
    pub divergence: f64,
    /// The computed consensus.
    pub synthesis: String,
}

impl AnalysisRecord {
    /// Build a record from its parts.
    pub fn new(
        architect: impl Into<String>,
        mystic: impl Into<String>,
        void: impl Into<String>,
        divergence: f64,
        synthesis: impl Into<String>,
    ) -> Self {
        Self {
            architect: architect.into(),
            mystic: mystic.into(),
            void: void.into(),
            divergence,
            synthesis: synthesis.into(),
        }
    }

    /// The fixed record sealed into every genesis block.
    pub fn genesis() -> Self {
        Self::new(
            "SYSTEM_INIT",
            "PRIMAM MATERIA",
            "NULL",
            0.0,
            "The Ledger is Opened.",
        )
    }

    /// Whether the views diverge past the midpoint.
    pub fn is_divergent(&self) -> bool {
        self.divergence > 0.5
    }
}

impl Default for AnalysisRecord {
    fn default() -> Self {
        Self::genesis()
    }
}
