//! MBTI converter — four threshold rules over Big Five axes.
//!
//! ```text
//! extraversion      > 50 → E  else I
//! openness          > 50 → N  else S
//! agreeableness     > 50 → F  else T
//! conscientiousness > 50 → J  else P
//! ```
//!
//! The comparison is strict: a score of exactly 50 takes the second pole.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::big_five::{BigFiveTrait, BigFiveTraits, MIDPOINT, SCORE_MAX};
use super::error::PersonaError;

/// Floor added to the mean dimension strength to form the confidence.
const CONFIDENCE_BASE: f64 = 20.0;

// ============================================================================
// Axes
// ============================================================================

/// The four MBTI preference axes, in type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MbtiAxis {
    /// Extraversion / Introversion.
    Ei,
    /// Sensing / iNtuition.
    Sn,
    /// Thinking / Feeling.
    Tf,
    /// Judging / Perceiving.
    Jp,
}

impl MbtiAxis {
    pub const ALL: [MbtiAxis; 4] = [Self::Ei, Self::Sn, Self::Tf, Self::Jp];

    /// Big Five axis that drives this preference.
    pub fn source_trait(&self) -> BigFiveTrait {
        match self {
            Self::Ei => BigFiveTrait::Extraversion,
            Self::Sn => BigFiveTrait::Openness,
            Self::Tf => BigFiveTrait::Agreeableness,
            Self::Jp => BigFiveTrait::Conscientiousness,
        }
    }

    /// Letter chosen when the source trait is above the midpoint.
    pub fn high_pole(&self) -> char {
        match self {
            Self::Ei => 'E',
            Self::Sn => 'N',
            Self::Tf => 'F',
            Self::Jp => 'J',
        }
    }

    /// Letter chosen at or below the midpoint.
    pub fn low_pole(&self) -> char {
        match self {
            Self::Ei => 'I',
            Self::Sn => 'S',
            Self::Tf => 'T',
            Self::Jp => 'P',
        }
    }

    /// Letter for a source trait score.
    pub fn pole_for(&self, score: f64) -> char {
        if score > MIDPOINT {
            self.high_pole()
        } else {
            self.low_pole()
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Ei => 0,
            Self::Sn => 1,
            Self::Tf => 2,
            Self::Jp => 3,
        }
    }
}

// ============================================================================
// The 16 types
// ============================================================================

/// One of the 16 four-letter MBTI types.  Serializes as its uppercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl MbtiType {
    pub const ALL: [MbtiType; 16] = [
        Self::Istj,
        Self::Isfj,
        Self::Infj,
        Self::Intj,
        Self::Istp,
        Self::Isfp,
        Self::Infp,
        Self::Intp,
        Self::Estp,
        Self::Esfp,
        Self::Enfp,
        Self::Entp,
        Self::Estj,
        Self::Esfj,
        Self::Enfj,
        Self::Entj,
    ];

    /// Build a type from its four high-pole flags (E, N, F, J).
    pub fn from_poles(e: bool, n: bool, f: bool, j: bool) -> Self {
        match (e, n, f, j) {
            (false, false, false, true) => Self::Istj,
            (false, false, true, true) => Self::Isfj,
            (false, true, true, true) => Self::Infj,
            (false, true, false, true) => Self::Intj,
            (false, false, false, false) => Self::Istp,
            (false, false, true, false) => Self::Isfp,
            (false, true, true, false) => Self::Infp,
            (false, true, false, false) => Self::Intp,
            (true, false, false, false) => Self::Estp,
            (true, false, true, false) => Self::Esfp,
            (true, true, true, false) => Self::Enfp,
            (true, true, false, false) => Self::Entp,
            (true, false, false, true) => Self::Estj,
            (true, false, true, true) => Self::Esfj,
            (true, true, true, true) => Self::Enfj,
            (true, true, false, true) => Self::Entj,
        }
    }

    /// Build a type from four letters in EI·SN·TF·JP order.
    pub fn from_letters(letters: [char; 4]) -> Option<Self> {
        let mut high = [false; 4];
        for (axis, letter) in MbtiAxis::ALL.iter().zip(letters) {
            let letter = letter.to_ascii_uppercase();
            if letter == axis.high_pole() {
                high[axis.index()] = true;
            } else if letter != axis.low_pole() {
                return None;
            }
        }
        Some(Self::from_poles(high[0], high[1], high[2], high[3]))
    }

    /// Four-letter code, e.g. `"INTJ"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Istj => "ISTJ",
            Self::Isfj => "ISFJ",
            Self::Infj => "INFJ",
            Self::Intj => "INTJ",
            Self::Istp => "ISTP",
            Self::Isfp => "ISFP",
            Self::Infp => "INFP",
            Self::Intp => "INTP",
            Self::Estp => "ESTP",
            Self::Esfp => "ESFP",
            Self::Enfp => "ENFP",
            Self::Entp => "ENTP",
            Self::Estj => "ESTJ",
            Self::Esfj => "ESFJ",
            Self::Enfj => "ENFJ",
            Self::Entj => "ENTJ",
        }
    }

    /// The four letters in EI·SN·TF·JP order.
    pub fn letters(&self) -> [char; 4] {
        let mut out = ['?'; 4];
        for (slot, c) in out.iter_mut().zip(self.code().chars()) {
            *slot = c;
        }
        out
    }

    /// Letter this type holds on one axis.
    pub fn letter(&self, axis: MbtiAxis) -> char {
        self.letters()[axis.index()]
    }
}

impl std::fmt::Display for MbtiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MbtiType {
    type Err = PersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let letters: [char; 4] = chars
            .try_into()
            .map_err(|_| PersonaError::invalid(format!("MBTI type '{}' is not 4 letters", s)))?;
        Self::from_letters(letters)
            .ok_or_else(|| PersonaError::invalid(format!("'{}' is not an MBTI type", s)))
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Chosen pole and its strength (0–100) on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub preference: char,
    pub strength: f64,
}

/// Per-axis scores in type-code order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MbtiDimensions {
    pub ei: DimensionScore,
    pub sn: DimensionScore,
    pub tf: DimensionScore,
    pub jp: DimensionScore,
}

impl MbtiDimensions {
    pub fn get(&self, axis: MbtiAxis) -> &DimensionScore {
        match axis {
            MbtiAxis::Ei => &self.ei,
            MbtiAxis::Sn => &self.sn,
            MbtiAxis::Tf => &self.tf,
            MbtiAxis::Jp => &self.jp,
        }
    }

    pub fn mean_strength(&self) -> f64 {
        MbtiAxis::ALL
            .iter()
            .map(|a| self.get(*a).strength)
            .sum::<f64>()
            / 4.0
    }
}

/// MBTI representation of a character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MbtiProfile {
    #[serde(rename = "type")]
    pub mbti_type: MbtiType,
    pub dimensions: MbtiDimensions,
    pub confidence: f64,
}

impl MbtiProfile {
    /// Profile for an externally supplied type with no strength data.
    ///
    /// Every axis gets strength 0, so confidence sits at its floor of 20.
    pub fn from_type(mbti_type: MbtiType) -> Self {
        let dim = |axis: MbtiAxis| DimensionScore {
            preference: mbti_type.letter(axis),
            strength: 0.0,
        };
        let dimensions = MbtiDimensions {
            ei: dim(MbtiAxis::Ei),
            sn: dim(MbtiAxis::Sn),
            tf: dim(MbtiAxis::Tf),
            jp: dim(MbtiAxis::Jp),
        };
        Self {
            mbti_type,
            confidence: confidence(&dimensions),
            dimensions,
        }
    }
}

// ============================================================================
// Conversion
// ============================================================================

fn score_axis(traits: &BigFiveTraits, axis: MbtiAxis) -> DimensionScore {
    let value = traits.get(axis.source_trait());
    DimensionScore {
        preference: axis.pole_for(value),
        strength: ((value - MIDPOINT).abs() * 2.0).min(SCORE_MAX),
    }
}

/// `min(100, mean strength + 20)`.
pub fn confidence(dimensions: &MbtiDimensions) -> f64 {
    (dimensions.mean_strength() + CONFIDENCE_BASE).min(SCORE_MAX)
}

/// Derive an MBTI profile from a validated Big Five vector.
pub fn convert(traits: &BigFiveTraits) -> MbtiProfile {
    let dimensions = MbtiDimensions {
        ei: score_axis(traits, MbtiAxis::Ei),
        sn: score_axis(traits, MbtiAxis::Sn),
        tf: score_axis(traits, MbtiAxis::Tf),
        jp: score_axis(traits, MbtiAxis::Jp),
    };
    let pole = |axis: MbtiAxis| dimensions.get(axis).preference == axis.high_pole();
    let mbti_type = MbtiType::from_poles(
        pole(MbtiAxis::Ei),
        pole(MbtiAxis::Sn),
        pole(MbtiAxis::Tf),
        pole(MbtiAxis::Jp),
    );
    MbtiProfile {
        mbti_type,
        confidence: confidence(&dimensions),
        dimensions,
    }
}

// ============================================================================
// Tests
// ============================================================================
