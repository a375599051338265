//! Numerology resonance: letters and digits reduced to digital roots.

use serde::{Deserialize, Serialize};

/// Classification of a digital root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResonanceType {
    /// Root 3 or 6.
    Tesla,
    /// Any other non-nine root.
    Standard,
    /// Root 9.
    Void,
}

/// Metrics computed over an input phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResonanceMetrics {
    pub input: String,
    pub numeric_sequence: Vec<u32>,
    pub sum: u64,
    pub digital_root: u64,
    pub is_resonant: bool,
    pub resonance_type: ResonanceType,
}

/// Digital root of `n`: repeated digit sum, with 0 for 0.
pub fn digital_root(n: u64) -> u64 {
    if n == 0 {
        0
    } else {
        (n - 1) % 9 + 1
    }
}

/// Compute resonance metrics for `input`.
///
/// The input is upper-cased first (full Unicode mapping, so `ß` becomes
/// `SS`), then only `A-Z` and `0-9` count. Digits keep their value; letters
/// take the digital root of their alphabet position (A=1 .. Z=26).
pub fn calculate_resonance(input: &str) -> ResonanceMetrics {
    let numeric_sequence: Vec<u32> = input
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .map(|c| match c.to_digit(10) {
            Some(d) => d,
            None => digital_root(u64::from(c as u32 - 'A' as u32 + 1)) as u32,
        })
        .collect();

    let sum: u64 = numeric_sequence.iter().map(|&v| u64::from(v)).sum();
    let root = digital_root(sum);
    let is_resonant = matches!(root, 3 | 6 | 9);
    let resonance_type = match root {
        9 => ResonanceType::Void,
        3 | 6 => ResonanceType::Tesla,
        _ => ResonanceType::Standard,
    };

    ResonanceMetrics {
        input: input.to_string(),
        numeric_sequence,
        sum,
        digital_root: root,
        is_resonant,
        resonance_type,
    }
}
