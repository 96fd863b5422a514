//! Dark Triad calculator — Machiavellianism, Narcissism, Psychopathy.
//!
//! Two entry points share one set of coefficients: [`convert`] reads a Big
//! Five vector directly and is what the engine uses; [`convert_from_hexaco`]
//! reconstructs the Big Five inputs it needs from a HEXACO profile.
//!
//! ```text
//! machiavellianism = 0.6·(100−A) + 0.3·(100−N) + 0.1·(0.3·O)
//! narcissism       = 0.5·E + 0.3·0.7·(100−A) + 0.2·0.5·(100−N)
//! psychopathy      = 0.6·0.8·(100−A) + 0.25·0.4·(100−N) + 0.15·0.3·(100−C)
//! ```

use serde::{Deserialize, Serialize};

use super::big_five::{BigFiveTraits, SCORE_MAX, SCORE_MIN};
use super::error::{PersonaError, Result};
use super::hexaco::HexacoProfile;

/// Source traits below this add to confidence.
const LOW_TRAIT: f64 = 30.0;

// ============================================================================
// Risk banding
// ============================================================================

/// Categorical reading of overall darkness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

/// Lower edges of the MODERATE, HIGH and EXTREME bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBands {
    #[serde(default = "default_moderate")]
    pub moderate: f64,
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_extreme")]
    pub extreme: f64,
}

fn default_moderate() -> f64 {
    25.0
}

fn default_high() -> f64 {
    50.0
}

fn default_extreme() -> f64 {
    75.0
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            moderate: default_moderate(),
            high: default_high(),
            extreme: default_extreme(),
        }
    }
}

impl RiskBands {
    /// Bands must be strictly increasing inside [0, 100].
    pub fn validate(&self) -> Result<()> {
        let ordered = SCORE_MIN <= self.moderate
            && self.moderate < self.high
            && self.high < self.extreme
            && self.extreme <= SCORE_MAX;
        if ordered {
            Ok(())
        } else {
            Err(PersonaError::Config(format!(
                "risk bands must satisfy 0 <= moderate < high < extreme <= 100, got {} / {} / {}",
                self.moderate, self.high, self.extreme
            )))
        }
    }
}

impl RiskLevel {
    pub fn from_darkness(darkness: f64, bands: &RiskBands) -> Self {
        if darkness < bands.moderate {
            Self::Low
        } else if darkness < bands.high {
            Self::Moderate
        } else if darkness < bands.extreme {
            Self::High
        } else {
            Self::Extreme
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DarkTriadProfile {
    pub machiavellianism: f64,
    pub narcissism: f64,
    pub psychopathy: f64,
    /// Mean of the three scores.
    pub overall_darkness: f64,
    pub risk_level: RiskLevel,
    pub confidence: f64,
}

impl DarkTriadProfile {
    /// Sum of the three sub-scores (0–300).
    pub fn total(&self) -> f64 {
        self.machiavellianism + self.narcissism + self.psychopathy
    }

    /// Mean of the three sub-scores.
    pub fn mean(&self) -> f64 {
        self.total() / 3.0
    }
}

// ============================================================================
// Conversion
// ============================================================================

pub fn machiavellianism(t: &BigFiveTraits) -> f64 {
    let score = 0.6 * (SCORE_MAX - t.agreeableness)
        + 0.3 * (SCORE_MAX - t.neuroticism)
        + 0.1 * (0.3 * t.openness);
    score.min(SCORE_MAX)
}

pub fn narcissism(t: &BigFiveTraits) -> f64 {
    let score = 0.5 * t.extraversion
        + 0.3 * 0.7 * (SCORE_MAX - t.agreeableness)
        + 0.2 * 0.5 * (SCORE_MAX - t.neuroticism);
    score.min(SCORE_MAX)
}

pub fn psychopathy(t: &BigFiveTraits) -> f64 {
    let score = 0.6 * 0.8 * (SCORE_MAX - t.agreeableness)
        + 0.25 * 0.4 * (SCORE_MAX - t.neuroticism)
        + 0.15 * 0.3 * (SCORE_MAX - t.conscientiousness);
    score.min(SCORE_MAX)
}

/// 50 plus bonuses for low agreeableness (20), neuroticism (15) and
/// conscientiousness (10).
pub fn confidence(t: &BigFiveTraits) -> f64 {
    let mut c: f64 = 50.0;
    if t.agreeableness < LOW_TRAIT {
        c += 20.0;
    }
    if t.neuroticism < LOW_TRAIT {
        c += 15.0;
    }
    if t.conscientiousness < LOW_TRAIT {
        c += 10.0;
    }
    c.min(SCORE_MAX)
}

/// Derive a Dark Triad profile with the default risk bands.
pub fn convert(traits: &BigFiveTraits) -> DarkTriadProfile {
    convert_with_bands(traits, &RiskBands::default())
}

/// Derive a Dark Triad profile, banding overall darkness with `bands`.
pub fn convert_with_bands(traits: &BigFiveTraits, bands: &RiskBands) -> DarkTriadProfile {
    let machiavellianism = machiavellianism(traits);
    let narcissism = narcissism(traits);
    let psychopathy = psychopathy(traits);
    let overall_darkness = (machiavellianism + narcissism + psychopathy) / 3.0;
    DarkTriadProfile {
        machiavellianism,
        narcissism,
        psychopathy,
        overall_darkness,
        risk_level: RiskLevel::from_darkness(overall_darkness, bands),
        confidence: confidence(traits),
    }
}

/// Big Five inputs recovered from a HEXACO profile.
///
/// Exact whenever the source agreeableness was at least 10 and emotionality
/// did not saturate at 100.
pub fn big_five_from_hexaco(hexaco: &HexacoProfile) -> BigFiveTraits {
    let agreeableness = (hexaco.agreeableness + 10.0).min(SCORE_MAX);
    let neuroticism = (hexaco.emotionality - 0.2 * agreeableness).clamp(SCORE_MIN, SCORE_MAX);
    BigFiveTraits {
        openness: hexaco.openness,
        conscientiousness: hexaco.conscientiousness,
        extraversion: hexaco.extraversion,
        agreeableness,
        neuroticism,
    }
}

/// Derive a Dark Triad profile from a HEXACO profile.
pub fn convert_from_hexaco(hexaco: &HexacoProfile) -> DarkTriadProfile {
    convert(&big_five_from_hexaco(hexaco))
}

// ============================================================================
// Content advisory
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningTier {
    None,
    Low,
    Medium,
    High,
}

/// Advisory tier and minimum audience age for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAdvisory {
    pub tier: WarningTier,
    pub minimum_age: u8,
}

/// Classify a profile by the sum of its three scores.  Purely advisory.
pub fn content_advisory(profile: &DarkTriadProfile) -> ContentAdvisory {
    let total = profile.total();
    let (tier, minimum_age) = if total > 240.0 {
        (WarningTier::High, 18)
    } else if total > 180.0 {
        (WarningTier::Medium, 16)
    } else if total > 120.0 {
        (WarningTier::Low, 13)
    } else {
        (WarningTier::None, 0)
    };
    ContentAdvisory { tier, minimum_age }
}

// ============================================================================
// Tests
// ============================================================================
