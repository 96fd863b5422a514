//! Personality system identifiers and the per-system profile sum type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dark_triad::DarkTriadProfile;
use super::error::PersonaError;
use super::hexaco::HexacoProfile;
use super::mbti::MbtiProfile;
use super::tci::TciProfile;

/// The five personality models the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonalitySystem {
    BigFive,
    Mbti,
    Hexaco,
    DarkTriad,
    Tci,
}

impl PersonalitySystem {
    pub const ALL: [PersonalitySystem; 5] = [
        Self::BigFive,
        Self::Mbti,
        Self::Hexaco,
        Self::DarkTriad,
        Self::Tci,
    ];

    /// Systems that can be derived from a Big Five vector.
    pub const DERIVED: [PersonalitySystem; 4] =
        [Self::Mbti, Self::Hexaco, Self::DarkTriad, Self::Tci];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BigFive => "BIG_FIVE",
            Self::Mbti => "MBTI",
            Self::Hexaco => "HEXACO",
            Self::DarkTriad => "DARK_TRIAD",
            Self::Tci => "TCI",
        }
    }
}

impl std::fmt::Display for PersonalitySystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PersonalitySystem {
    type Err = PersonaError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|sys| sys.name() == normalized)
            .ok_or_else(|| PersonaError::UnsupportedSystem(s.to_string()))
    }
}

/// A single derived profile, tagged by its system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", content = "profile", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemProfile {
    Mbti(MbtiProfile),
    Hexaco(HexacoProfile),
    DarkTriad(DarkTriadProfile),
    Tci(TciProfile),
}

impl SystemProfile {
    pub fn system(&self) -> PersonalitySystem {
        match self {
            Self::Mbti(_) => PersonalitySystem::Mbti,
            Self::Hexaco(_) => PersonalitySystem::Hexaco,
            Self::DarkTriad(_) => PersonalitySystem::DarkTriad,
            Self::Tci(_) => PersonalitySystem::Tci,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Self::Mbti(p) => p.confidence,
            Self::Hexaco(p) => p.confidence,
            Self::DarkTriad(p) => p.confidence,
            Self::Tci(p) => p.confidence,
        }
    }
}
