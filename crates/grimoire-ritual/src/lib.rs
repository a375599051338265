//! # Grimoire Ritual
//!
//! Deterministic seals for archetype records, plus numerology resonance.
//!
//! Seals reuse the ledger's digest and number formatting, but they never
//! enter the chain: they are produced, returned, and displayed.
//!
//! ## Key Types
//!
//! - [`ArchetypeRole`] - The three archetypes and their profile table
//! - [`Seal`] - A truncated hex fingerprint
//! - [`GrandRitualReport`] - All archetypes awakened under one master seal
//! - [`ResonanceMetrics`] - Digital-root analysis of a phrase

pub mod archetype;
pub mod error;
pub mod numerology;
pub mod ritual;
pub mod seal;

pub use archetype::{ArchetypeProfile, ArchetypeRole};
pub use error::{Result, RitualError};
pub use numerology::{calculate_resonance, digital_root, ResonanceMetrics, ResonanceType};
pub use ritual::{
    awaken, awaken_at, combined_resonance, forge_master_seal, manifest_aspect,
    manifest_aspect_at, perform_grand_ritual, perform_grand_ritual_at, ArchetypeResult,
    AspectManifestation, AwakeningStatus, GrandRitualReport,
};
pub use seal::{derive_seal, seal_input, Seal, SealWidth, MIN_SEAL_WIDTH};
