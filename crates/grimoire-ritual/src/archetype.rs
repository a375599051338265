//! Archetype roles and their static profiles.
//!
//! Each role is a row in a lookup table: base resonance, epoch, and the
//! modifier applied when the archetype manifests an aspect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RitualError;

/// One of the three archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchetypeRole {
    Giant,
    Legion,
    Dragon,
}

/// Aspect modifier: `(aspect, now_ms) -> resonance offset`.
type Modifier = fn(&str, i64) -> f64;

/// Static configuration for an archetype.
#[derive(Debug)]
pub struct ArchetypeProfile {
    /// The role this profile describes.
    pub role: ArchetypeRole,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Resonance before any modifier.
    pub base_resonance: f64,
    /// Epoch tag bound into every seal.
    pub epoch: &'static str,
    /// Prefix for manifested aspect names.
    pub aspect_prefix: Option<&'static str>,
    modifier: Modifier,
}

impl ArchetypeProfile {
    /// Resonance offset for manifesting `aspect` at `now_ms`.
    pub fn aspect_modifier(&self, aspect: &str, now_ms: i64) -> f64 {
        (self.modifier)(aspect, now_ms)
    }

    /// Display form of a manifested aspect.
    pub fn aspect_label(&self, aspect: &str) -> String {
        let upper = aspect.to_uppercase();
        match self.aspect_prefix {
            Some(prefix) => format!("{prefix}: {upper}"),
            None => upper,
        }
    }
}

fn aspect_len(aspect: &str) -> f64 {
    aspect.chars().count() as f64
}

fn giant_modifier(aspect: &str, _now_ms: i64) -> f64 {
    aspect_len(aspect) * 0.001
}

fn legion_modifier(aspect: &str, _now_ms: i64) -> f64 {
    aspect_len(aspect) * 0.002
}

// Time flux over seconds, amplitude 0.15.
fn dragon_modifier(aspect: &str, now_ms: i64) -> f64 {
    (now_ms as f64 / 1000.0).sin() * 0.15 + aspect_len(aspect) * 0.005
}

static PROFILES: [ArchetypeProfile; 3] = [
    ArchetypeProfile {
        role: ArchetypeRole::Giant,
        name: "The Giants",
        description: "Primordial builders of resonance engines",
        base_resonance: 0.999,
        epoch: "TRANSCENDENT",
        aspect_prefix: None,
        modifier: giant_modifier,
    },
    ArchetypeProfile {
        role: ArchetypeRole::Legion,
        name: "The 144",
        description: "Managers of invocations and syntropic legions",
        base_resonance: 0.888,
        epoch: "SYNTROPIC",
        aspect_prefix: Some("LEGION"),
        modifier: legion_modifier,
    },
    ArchetypeProfile {
        role: ArchetypeRole::Dragon,
        name: "The Dragons",
        description: "Guardians of temporal gates and wisdom",
        base_resonance: 0.777,
        epoch: "RENAISSANCE",
        aspect_prefix: Some("ENTITY"),
        modifier: dragon_modifier,
    },
];

impl ArchetypeRole {
    /// All roles, in ritual order.
    pub const ALL: [Self; 3] = [Self::Giant, Self::Legion, Self::Dragon];

    /// The role's static profile.
    pub fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Self::Giant => &PROFILES[0],
            Self::Legion => &PROFILES[1],
            Self::Dragon => &PROFILES[2],
        }
    }

    /// Identifier used in seal inputs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Giant => "GIANT",
            Self::Legion => "LEGION",
            Self::Dragon => "DRAGON",
        }
    }
}

impl fmt::Display for ArchetypeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeRole {
    type Err = RitualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GIANT" => Ok(Self::Giant),
            "LEGION" => Ok(Self::Legion),
            "DRAGON" => Ok(Self::Dragon),
            _ => Err(RitualError::UnknownRole(s.to_string())),
        }
    }
}
