//! Awakening, aspect manifestation, and the grand ritual.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use grimoire_core::{now_millis, Digest};

use crate::archetype::ArchetypeRole;
use crate::error::{Result, RitualError};
use crate::seal::{derive_seal, Seal, SealWidth};

/// Suffix appended to the joined seals when forging a master seal.
const MASTER_SUFFIX: &str = "-MASTER-RITUAL";

/// Awakening progress of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AwakeningStatus {
    Sleeping,
    Awakening,
    Awakened,
}

/// Outcome of awakening one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeResult {
    pub role: ArchetypeRole,
    pub name: String,
    pub description: String,
    pub resonance: f64,
    pub seal: Seal,
    pub epoch: String,
    pub status: AwakeningStatus,
}

/// An aspect manifested by an archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectManifestation {
    pub aspect: String,
    pub origin_archetype: ArchetypeRole,
    pub aspect_seal: Seal,
    pub aspect_resonance: f64,
}

/// Report of a full ritual over every archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandRitualReport {
    pub master_seal: Seal,
    pub combined_resonance: f64,
    pub timestamp: i64,
    pub results: BTreeMap<ArchetypeRole, ArchetypeResult>,
}

/// Awaken an archetype at `now_ms`.
///
/// Resonance is the base value plus a small fluctuation driven by the clock.
pub fn awaken_at(role: ArchetypeRole, now_ms: i64) -> ArchetypeResult {
    let profile = role.profile();
    let resonance = profile.base_resonance + (now_ms as f64).sin() * 0.01;
    let seal = derive_seal(
        role.as_str(),
        profile.name,
        profile.epoch,
        resonance,
        now_ms,
        SealWidth::AWAKENING,
    );

    tracing::debug!(role = %role, %seal, resonance, "archetype awakened");

    ArchetypeResult {
        role,
        name: profile.name.to_string(),
        description: profile.description.to_string(),
        resonance,
        seal,
        epoch: profile.epoch.to_string(),
        status: AwakeningStatus::Awakened,
    }
}

/// Awaken an archetype now.
pub fn awaken(role: ArchetypeRole) -> ArchetypeResult {
    awaken_at(role, now_millis())
}

/// Manifest `aspect` through an archetype at `now_ms`.
pub fn manifest_aspect_at(
    role: ArchetypeRole,
    aspect: &str,
    now_ms: i64,
) -> Result<AspectManifestation> {
    if aspect.trim().is_empty() {
        return Err(RitualError::EmptyAspect);
    }

    let profile = role.profile();
    let resonance = profile.base_resonance + profile.aspect_modifier(aspect, now_ms);
    let aspect_seal = derive_seal(
        role.as_str(),
        aspect,
        profile.epoch,
        resonance,
        now_ms,
        SealWidth::ASPECT,
    );

    Ok(AspectManifestation {
        aspect: profile.aspect_label(aspect),
        origin_archetype: role,
        aspect_seal,
        aspect_resonance: resonance,
    })
}

/// Manifest `aspect` through an archetype now.
pub fn manifest_aspect(role: ArchetypeRole, aspect: &str) -> Result<AspectManifestation> {
    manifest_aspect_at(role, aspect, now_millis())
}

/// Forge one seal over a set of awakening results.
///
/// Order matters: the seals are joined in the order given.
pub fn forge_master_seal(results: &[ArchetypeResult]) -> Seal {
    let mut input = results
        .iter()
        .map(|r| r.seal.as_str())
        .collect::<Vec<_>>()
        .join("-");
    input.push_str(MASTER_SUFFIX);
    Seal::from_digest(&Digest::hash_str(&input), SealWidth::ASPECT)
}

/// Mean resonance across results; `None` when there are none.
pub fn combined_resonance(results: &[ArchetypeResult]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let sum: f64 = results.iter().map(|r| r.resonance).sum();
    Some(sum / results.len() as f64)
}

/// Awaken every archetype and forge the master seal.
pub fn perform_grand_ritual_at(now_ms: i64) -> GrandRitualReport {
    let awakened: Vec<ArchetypeResult> = ArchetypeRole::ALL
        .iter()
        .map(|&role| awaken_at(role, now_ms))
        .collect();

    let master_seal = forge_master_seal(&awakened);
    let combined = combined_resonance(&awakened).unwrap_or_default();

    tracing::info!(%master_seal, combined_resonance = combined, "grand ritual complete");

    GrandRitualReport {
        master_seal,
        combined_resonance: combined,
        timestamp: now_ms,
        results: awakened.into_iter().map(|r| (r.role, r)).collect(),
    }
}

/// Perform the grand ritual now.
pub fn perform_grand_ritual() -> GrandRitualReport {
    perform_grand_ritual_at(now_millis())
}
