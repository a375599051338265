//! Error types for the Grimoire core.

use thiserror::Error;

/// Structural errors from the core primitives.
///
/// Integrity failures are not errors here: the verifier reports them as
/// values (see [`crate::verify::IntegrityViolation`]).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The hash primitive failed its self-test. Fatal at startup.
    #[error("digest primitive unavailable: {0}")]
    DigestUnavailable(String),

    /// The predecessor already holds the largest representable index.
    #[error("cannot seal after block {0}: index space exhausted")]
    IndexOverflow(u64),
}
