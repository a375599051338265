//! Error types for ritual operations.

use thiserror::Error;

/// Errors that can occur during seal derivation and rituals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RitualError {
    /// Seal widths must lie in `16..=64` hex characters.
    #[error("seal width {0} outside 16..=64")]
    InvalidSealWidth(usize),

    /// Role label did not name a known archetype.
    #[error("unknown archetype role: {0}")]
    UnknownRole(String),

    /// An aspect must have at least one non-whitespace character.
    #[error("aspect name is empty")]
    EmptyAspect,
}

/// Result type for ritual operations.
pub type Result<T> = std::result::Result<T, RitualError>;
