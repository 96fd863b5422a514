//! Personality engine — validates a Big Five vector, runs every converter,
//! and attaches a consistency report.
//!
//! The engine holds only its [`EngineConfig`]; every call is a pure function
//! of its arguments, so one engine can be shared freely across threads.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

use super::adaptation::TraitAdapter;
use super::big_five::BigFiveTraits;
use super::compare::{self, ComparisonReport};
use super::consistency::{self, ConsistencyReport, DerivedProfiles};
use super::dark_triad::{self, DarkTriadProfile};
use super::error::{PersonaError, Result};
use super::hexaco::{self, HexacoProfile};
use super::mbti::{self, MbtiProfile, MbtiType};
use super::system::{PersonalitySystem, SystemProfile};
use super::tci::{self, GrowthProjection, TciProfile};

// ============================================================================
// Unified profile
// ============================================================================

/// A Big Five vector with every derived representation and their agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedProfile {
    pub big_five: BigFiveTraits,
    pub mbti: MbtiProfile,
    pub hexaco: HexacoProfile,
    pub dark_triad: DarkTriadProfile,
    pub tci: TciProfile,
    pub consistency: ConsistencyReport,
}

impl UnifiedProfile {
    pub fn derived_profiles(&self) -> DerivedProfiles<'_> {
        DerivedProfiles::new()
            .with_mbti(&self.mbti)
            .with_hexaco(&self.hexaco)
            .with_dark_triad(&self.dark_triad)
            .with_tci(&self.tci)
    }

    /// The derived profile for one system, if it is a derived system.
    pub fn profile(&self, system: PersonalitySystem) -> Option<SystemProfile> {
        match system {
            PersonalitySystem::BigFive => None,
            PersonalitySystem::Mbti => Some(SystemProfile::Mbti(self.mbti)),
            PersonalitySystem::Hexaco => Some(SystemProfile::Hexaco(self.hexaco)),
            PersonalitySystem::DarkTriad => Some(SystemProfile::DarkTriad(self.dark_triad)),
            PersonalitySystem::Tci => Some(SystemProfile::Tci(self.tci)),
        }
    }
}

// ============================================================================
// Archetypes
// ============================================================================

/// Narrative archetypes with a known system recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Hero,
    Villain,
    Antihero,
    Mentor,
    ComicRelief,
    LoveInterest,
    Antagonist,
    Sidekick,
    ComplexCharacter,
}

impl Archetype {
    pub const ALL: [Archetype; 9] = [
        Self::Hero,
        Self::Villain,
        Self::Antihero,
        Self::Mentor,
        Self::ComicRelief,
        Self::LoveInterest,
        Self::Antagonist,
        Self::Sidekick,
        Self::ComplexCharacter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Villain => "villain",
            Self::Antihero => "antihero",
            Self::Mentor => "mentor",
            Self::ComicRelief => "comic_relief",
            Self::LoveInterest => "love_interest",
            Self::Antagonist => "antagonist",
            Self::Sidekick => "sidekick",
            Self::ComplexCharacter => "complex_character",
        }
    }

    /// Systems that best describe this archetype, most useful first.
    pub fn recommended_systems(&self) -> &'static [PersonalitySystem] {
        use PersonalitySystem::*;
        match self {
            Self::Hero => &[BigFive, Mbti, Hexaco],
            Self::Villain => &[DarkTriad, Hexaco, BigFive],
            Self::Antihero => &[DarkTriad, BigFive, Tci],
            Self::Mentor => &[Tci, BigFive, Mbti],
            Self::ComicRelief => &[BigFive, Mbti],
            Self::LoveInterest => &[Mbti, BigFive, Hexaco],
            Self::Antagonist => &[DarkTriad, Hexaco],
            Self::Sidekick => &[BigFive, Mbti],
            Self::ComplexCharacter => &[Tci, Hexaco, DarkTriad],
        }
    }
}

static ARCHETYPES: Lazy<HashMap<&'static str, Archetype>> =
    Lazy::new(|| Archetype::ALL.iter().map(|a| (a.name(), *a)).collect());

/// Recommendation for archetypes outside the known vocabulary.
pub const DEFAULT_SYSTEMS: [PersonalitySystem; 2] =
    [PersonalitySystem::BigFive, PersonalitySystem::Mbti];

/// Look up an archetype by name, case-insensitively.
pub fn find_archetype(name: &str) -> Option<Archetype> {
    ARCHETYPES.get(name.trim().to_lowercase().as_str()).copied()
}

/// Recommended systems for an archetype name; unknown names get
/// [`DEFAULT_SYSTEMS`].
pub fn recommended_systems(character_type: &str) -> Vec<PersonalitySystem> {
    match find_archetype(character_type) {
        Some(archetype) => archetype.recommended_systems().to_vec(),
        None => {
            log::debug!(
                "Unknown archetype '{}', using default recommendation",
                character_type
            );
            DEFAULT_SYSTEMS.to_vec()
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Orchestrates the converters and the cross-system validator.
#[derive(Debug, Clone, Default)]
pub struct PersonalityEngine {
    config: EngineConfig,
}

impl PersonalityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from a configuration, validating it first.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether all five fields are finite and within [0, 100].
    pub fn validate(&self, traits: &BigFiveTraits) -> bool {
        traits.is_valid()
    }

    /// Derive every system and score their agreement.
    ///
    /// Validation failure is fatal for the call; no partial profile is
    /// returned.  Consistency warnings never fail the call.
    pub fn generate_all(&self, traits: &BigFiveTraits) -> Result<UnifiedProfile> {
        if let Err(e) = traits.validate() {
            log::warn!("Rejected Big Five input: {}", e);
            return Err(e);
        }

        let mbti = mbti::convert(traits);
        let hexaco = hexaco::convert(traits);
        let dark_triad = dark_triad::convert_with_bands(traits, &self.config.risk_bands);
        let tci = tci::convert(traits);

        let consistency = consistency::score(
            traits,
            &DerivedProfiles::new()
                .with_mbti(&mbti)
                .with_hexaco(&hexaco)
                .with_dark_triad(&dark_triad)
                .with_tci(&tci),
        );
        for warning in &consistency.warnings {
            log::warn!("Consistency warning: {}", warning);
        }
        log::debug!(
            "Generated unified profile: mbti={}, risk={:?}, consistency={}",
            mbti.mbti_type,
            dark_triad.risk_level,
            consistency.overall_score
        );

        Ok(UnifiedProfile {
            big_five: *traits,
            mbti,
            hexaco,
            dark_triad,
            tci,
            consistency,
        })
    }

    /// Run `adapter` over a validated vector, clamp, then [`generate_all`](Self::generate_all).
    pub fn generate_adapted(
        &self,
        traits: &BigFiveTraits,
        adapter: &dyn TraitAdapter,
    ) -> Result<UnifiedProfile> {
        traits.validate()?;
        let adapted = adapter.adapt(traits).clamped();
        log::debug!("Applied trait adapter '{}'", adapter.name());
        self.generate_all(&adapted)
    }

    /// Derive a single system.  `BIG_FIVE` is the source, not a target.
    pub fn convert_to(
        &self,
        system: PersonalitySystem,
        traits: &BigFiveTraits,
    ) -> Result<SystemProfile> {
        traits.validate()?;
        match system {
            PersonalitySystem::Mbti => Ok(SystemProfile::Mbti(mbti::convert(traits))),
            PersonalitySystem::Hexaco => Ok(SystemProfile::Hexaco(hexaco::convert(traits))),
            PersonalitySystem::DarkTriad => Ok(SystemProfile::DarkTriad(
                dark_triad::convert_with_bands(traits, &self.config.risk_bands),
            )),
            PersonalitySystem::Tci => Ok(SystemProfile::Tci(tci::convert(traits))),
            PersonalitySystem::BigFive => Err(PersonaError::UnsupportedSystem(format!(
                "{} is the conversion source, not a target",
                system
            ))),
        }
    }

    /// [`convert_to`](Self::convert_to) keyed by system name.
    pub fn convert_to_named(&self, system: &str, traits: &BigFiveTraits) -> Result<SystemProfile> {
        self.convert_to(system.parse()?, traits)
    }

    /// Re-run the consistency checks on an existing unified profile.
    pub fn check_consistency(&self, profile: &UnifiedProfile) -> ConsistencyReport {
        consistency::score(&profile.big_five, &profile.derived_profiles())
    }

    /// Score an externally supplied MBTI type against the Big Five baseline,
    /// alongside the other derived systems.
    pub fn check_external_mbti(
        &self,
        traits: &BigFiveTraits,
        mbti_type: MbtiType,
    ) -> Result<ConsistencyReport> {
        let mut unified = self.generate_all(traits)?;
        unified.mbti = MbtiProfile::from_type(mbti_type);
        Ok(self.check_consistency(&unified))
    }

    /// Compare two or more vectors using the configured conflict threshold.
    pub fn compare(&self, profiles: &[BigFiveTraits]) -> Result<ComparisonReport> {
        compare::compare(profiles, self.config.comparison.conflict_threshold)
    }

    /// Project character growth with the configured rate.
    pub fn simulate_growth(&self, profile: &TciProfile, years: f64) -> Result<GrowthProjection> {
        tci::simulate_growth(profile, years, self.config.growth.rate_per_year)
    }
}

// ============================================================================
// Tests
// ============================================================================
