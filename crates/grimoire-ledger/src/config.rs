//! Ledger configuration.

use serde::{Deserialize, Serialize};

use grimoire_core::AnalysisRecord;

use crate::error::Result;

/// Default number of hex characters shown for digests in views.
pub const DEFAULT_DISPLAY_HASH_WIDTH: usize = 16;

/// Configuration for the Ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Re-check the tail's seal type and hash before sealing onto it.
    pub verify_tail: bool,
    /// Hex characters of each digest shown in block views.
    pub display_hash_width: usize,
    /// Record sealed into the genesis block.
    pub genesis_record: AnalysisRecord,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            verify_tail: true,
            display_hash_width: DEFAULT_DISPLAY_HASH_WIDTH,
            genesis_record: AnalysisRecord::genesis(),
        }
    }
}

impl LedgerConfig {
    /// Load from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::default();
        assert!(config.verify_tail);
        assert_eq!(config.display_hash_width, 16);
        assert_eq!(config.genesis_record, AnalysisRecord::genesis());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LedgerConfig::from_json(r#"{"display_hash_width": 8}"#).unwrap();
        assert_eq!(config.display_hash_width, 8);
        assert!(config.verify_tail);
        assert_eq!(config.genesis_record, AnalysisRecord::genesis());
    }

    #[test]
    fn test_bad_json() {
        let err = LedgerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
