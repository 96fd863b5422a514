//! TCI engine — Temperament and Character Inventory.
//!
//! Temperament covers the biologically framed traits and is treated as
//! stable.  Character covers the developmentally framed traits and is the
//! only part [`simulate_growth`] moves.  The two halves are computed
//! independently from the same Big Five vector and never read each other.

use serde::{Deserialize, Serialize};

use super::big_five::{BigFiveTraits, SCORE_MAX};
use super::error::{PersonaError, Result};

const CONFIDENCE_FLOOR: f64 = 60.0;

/// Seven temperament facets, each on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TciTemperament {
    pub novelty_seeking_curiosity: f64,
    pub impulsiveness: f64,
    pub extravagance: f64,
    pub disorderliness: f64,
    pub harm_avoidance: f64,
    pub reward_dependence: f64,
    pub persistence: f64,
}

/// Three character dimensions, each on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TciCharacter {
    pub self_directedness: f64,
    pub cooperativeness: f64,
    pub self_transcendence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TciProfile {
    pub temperament: TciTemperament,
    pub character: TciCharacter,
    pub confidence: f64,
}

pub fn convert_temperament(t: &BigFiveTraits) -> TciTemperament {
    let low_c = SCORE_MAX - t.conscientiousness;
    TciTemperament {
        novelty_seeking_curiosity: 0.7 * t.openness + 0.3 * t.extraversion,
        impulsiveness: 0.8 * low_c + 0.2 * t.neuroticism,
        extravagance: 0.6 * t.extraversion + 0.4 * low_c,
        disorderliness: low_c,
        harm_avoidance: 0.7 * t.neuroticism + 0.3 * (SCORE_MAX - t.extraversion),
        reward_dependence: 0.5 * t.extraversion + 0.5 * t.agreeableness,
        persistence: 0.8 * t.conscientiousness + 0.2 * (SCORE_MAX - t.neuroticism),
    }
}

pub fn convert_character(t: &BigFiveTraits) -> TciCharacter {
    let stability = SCORE_MAX - t.neuroticism;
    TciCharacter {
        self_directedness: 0.6 * t.conscientiousness + 0.4 * stability,
        cooperativeness: 0.8 * t.agreeableness + 0.2 * stability,
        self_transcendence: 0.6 * t.openness + 0.4 * t.agreeableness,
    }
}

/// Flatter profiles score higher: `max(60, 100 − variance)`.
pub fn confidence(t: &BigFiveTraits) -> f64 {
    (SCORE_MAX - t.variance()).max(CONFIDENCE_FLOOR)
}

pub fn convert(traits: &BigFiveTraits) -> TciProfile {
    TciProfile {
        temperament: convert_temperament(traits),
        character: convert_character(traits),
        confidence: confidence(traits),
    }
}

// ============================================================================
// Growth simulation
// ============================================================================

/// Before/after view of a character over a span of years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub years: f64,
    pub initial: TciProfile,
    pub developed: TciProfile,
}

/// Project character maturation over `years`.
///
/// Each character dimension closes the gap to 100 by a factor of
/// `1 − e^(−rate·years)`.  Temperament and confidence stay fixed.
pub fn simulate_growth(profile: &TciProfile, years: f64, rate: f64) -> Result<GrowthProjection> {
    if !years.is_finite() || years < 0.0 {
        return Err(PersonaError::invalid(format!(
            "growth time span must be a finite, non-negative number of years, got {}",
            years
        )));
    }
    if !rate.is_finite() || rate < 0.0 {
        return Err(PersonaError::invalid(format!(
            "growth rate must be finite and non-negative, got {}",
            rate
        )));
    }

    let progress = 1.0 - (-rate * years).exp();
    let mature = |v: f64| (v + (SCORE_MAX - v) * progress).min(SCORE_MAX);

    let mut developed = *profile;
    developed.character = TciCharacter {
        self_directedness: mature(profile.character.self_directedness),
        cooperativeness: mature(profile.character.cooperativeness),
        self_transcendence: mature(profile.character.self_transcendence),
    };

    Ok(GrowthProjection {
        years,
        initial: *profile,
        developed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(o: f64, c: f64, e: f64, a: f64, n: f64) -> BigFiveTraits {
        BigFiveTraits::new(o, c, e, a, n).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_temperament_blends() {
        let t = convert_temperament(&traits(80.0, 30.0, 60.0, 40.0, 20.0));
        assert!(close(t.novelty_seeking_curiosity, 74.0));
        assert!(close(t.impulsiveness, 60.0));
        assert!(close(t.extravagance, 64.0));
        assert!(close(t.disorderliness, 70.0));
        assert!(close(t.harm_avoidance, 26.0));
        assert!(close(t.reward_dependence, 50.0));
        assert!(close(t.persistence, 40.0));
    }

    #[test]
    fn test_character_blends() {
        let c = convert_character(&traits(80.0, 30.0, 60.0, 40.0, 20.0));
        assert!(close(c.self_directedness, 50.0));
        assert!(close(c.cooperativeness, 48.0));
        assert!(close(c.self_transcendence, 64.0));
    }

    #[test]
    fn test_confidence_floor() {
        assert_eq!(convert(&BigFiveTraits::neutral()).confidence, 100.0);
        let spiky = traits(0.0, 100.0, 0.0, 100.0, 0.0);
        assert_eq!(convert(&spiky).confidence, 60.0);
        let mild = traits(45.0, 55.0, 50.0, 50.0, 50.0);
        assert!(close(convert(&mild).confidence, 90.0));
    }

    #[test]
    fn test_growth_zero_years_is_identity() {
        let p = convert(&traits(30.0, 40.0, 50.0, 60.0, 70.0));
        let g = simulate_growth(&p, 0.0, 0.05).unwrap();
        assert_eq!(g.initial, p);
        assert_eq!(g.developed, p);
    }

    #[test]
    fn test_growth_moves_character_only() {
        let p = convert(&traits(30.0, 40.0, 50.0, 60.0, 70.0));
        let g = simulate_growth(&p, 10.0, 0.05).unwrap();
        assert_eq!(g.developed.temperament, p.temperament);
        assert_eq!(g.developed.confidence, p.confidence);
        assert!(g.developed.character.self_directedness > p.character.self_directedness);
        assert!(g.developed.character.cooperativeness > p.character.cooperativeness);
        assert!(g.developed.character.self_transcendence > p.character.self_transcendence);
        assert!(g.developed.character.self_transcendence <= 100.0);
    }

    #[test]
    fn test_growth_is_monotonic_in_time() {
        let p = convert(&traits(30.0, 40.0, 50.0, 60.0, 70.0));
        let short = simulate_growth(&p, 2.0, 0.05).unwrap();
        let long = simulate_growth(&p, 20.0, 0.05).unwrap();
        assert!(
            long.developed.character.cooperativeness >= short.developed.character.cooperativeness
        );
    }

    #[test]
    fn test_growth_rejects_negative_span() {
        let p = convert(&BigFiveTraits::neutral());
        assert!(matches!(
            simulate_growth(&p, -1.0, 0.05),
            Err(PersonaError::InvalidInput { .. })
        ));
        assert!(simulate_growth(&p, f64::NAN, 0.05).is_err());
        assert!(simulate_growth(&p, 1.0, -0.1).is_err());
    }
}
