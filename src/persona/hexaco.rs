//! HEXACO calculator.
//!
//! Extraversion, conscientiousness and openness pass through.  Agreeableness
//! shifts down to the narrower HEXACO construct, emotionality extends
//! neuroticism with an empathy share of agreeableness, and Honesty-Humility,
//! which has no Big Five analogue, is synthesized from stability,
//! agreeableness and conscientiousness.

use serde::{Deserialize, Serialize};

use super::big_five::{BigFiveTraits, SCORE_MAX, SCORE_MIN};

const AGREEABLENESS_SHIFT: f64 = 10.0;
const EMPATHY_WEIGHT: f64 = 0.2;
/// Below this agreeableness, Honesty-Humility takes the villain penalty.
const LOW_AGREEABLENESS: f64 = 20.0;
const VILLAIN_PENALTY: f64 = 30.0;
const CONFIDENCE_BASE: f64 = 70.0;
const CONFIDENCE_PER_EXTREME: f64 = 5.0;

/// Six-factor HEXACO profile, every field on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexacoProfile {
    pub honesty_humility: f64,
    pub emotionality: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub openness: f64,
    pub confidence: f64,
}

/// Honesty-Humility from the mean of stability, agreeableness and
/// conscientiousness.
pub fn honesty_humility(traits: &BigFiveTraits) -> f64 {
    let base = ((SCORE_MAX - traits.neuroticism) + traits.agreeableness + traits.conscientiousness)
        / 3.0;
    if traits.agreeableness < LOW_AGREEABLENESS {
        (base - VILLAIN_PENALTY).max(SCORE_MIN)
    } else {
        base.min(SCORE_MAX)
    }
}

/// `min(100, neuroticism + 0.2 × agreeableness)`.
pub fn emotionality(traits: &BigFiveTraits) -> f64 {
    (traits.neuroticism + traits.agreeableness * EMPATHY_WEIGHT).min(SCORE_MAX)
}

/// 70 plus 5 per extreme source trait, capped at 100.
pub fn confidence(traits: &BigFiveTraits) -> f64 {
    (CONFIDENCE_BASE + CONFIDENCE_PER_EXTREME * traits.extreme_count() as f64).min(SCORE_MAX)
}

/// Derive a HEXACO profile from a validated Big Five vector.
pub fn convert(traits: &BigFiveTraits) -> HexacoProfile {
    HexacoProfile {
        honesty_humility: honesty_humility(traits),
        emotionality: emotionality(traits),
        extraversion: traits.extraversion,
        agreeableness: (traits.agreeableness - AGREEABLENESS_SHIFT).max(SCORE_MIN),
        conscientiousness: traits.conscientiousness,
        openness: traits.openness,
        confidence: confidence(traits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(o: f64, c: f64, e: f64, a: f64, n: f64) -> BigFiveTraits {
        BigFiveTraits::new(o, c, e, a, n).unwrap()
    }

    #[test]
    fn test_villain_honesty_scenario() {
        let h = convert(&traits(50.0, 10.0, 50.0, 10.0, 10.0));
        // avg(90, 10, 10) = 36.67, minus 30
        assert!((h.honesty_humility - 20.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_villain_penalty_floors_at_zero() {
        let h = convert(&traits(50.0, 0.0, 50.0, 0.0, 100.0));
        assert_eq!(h.honesty_humility, 0.0);
    }

    #[test]
    fn test_penalty_threshold_is_strict() {
        let at = honesty_humility(&traits(50.0, 50.0, 50.0, 20.0, 50.0));
        assert!((at - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_pass_through_and_shift() {
        let h = convert(&traits(65.0, 75.0, 35.0, 5.0, 40.0));
        assert_eq!(h.openness, 65.0);
        assert_eq!(h.conscientiousness, 75.0);
        assert_eq!(h.extraversion, 35.0);
        assert_eq!(h.agreeableness, 0.0);
        assert_eq!(h.emotionality, 41.0);
    }

    #[test]
    fn test_emotionality_caps() {
        let h = convert(&traits(50.0, 50.0, 50.0, 100.0, 95.0));
        assert_eq!(h.emotionality, 100.0);
    }

    #[test]
    fn test_confidence_counts_extremes() {
        assert_eq!(convert(&BigFiveTraits::neutral()).confidence, 70.0);
        assert_eq!(convert(&traits(90.0, 10.0, 50.0, 50.0, 50.0)).confidence, 80.0);
        assert_eq!(convert(&traits(0.0, 100.0, 0.0, 100.0, 0.0)).confidence, 95.0);
    }
}
