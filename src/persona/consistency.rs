//! Cross-system validator — agreement between a Big Five vector and the
//! profiles derived from (or supplied alongside) it.
//!
//! Two pairwise measures are reported as data:
//!
//! - **MBTI consistency**: share of letters that match the type re-derived
//!   from the Big Five vector (0, 25, 50, 75 or 100).
//! - **HEXACO consistency**: mean of `100 − |big_five − hexaco|` over the four
//!   shared factors.
//!
//! Three coherence rules then run in a fixed order.  Each violated rule
//! appends one warning and deducts its penalty from a score that starts at
//! 100 and never drops below 0.
//!
//! | Rule | Condition | Penalty |
//! |------|-----------|---------|
//! | extraversion mismatch | MBTI E/I letter disagrees with `extraversion > 50` | 10 |
//! | honesty vs darkness | Honesty-Humility > 70 and mean Dark Triad > 50 | 15 |
//! | directed yet impulsive | self-directedness > 70 and impulsiveness > 70 | 10 |

use serde::{Deserialize, Serialize};

use super::big_five::{BigFiveTrait, BigFiveTraits, MIDPOINT, SCORE_MAX, SCORE_MIN};
use super::dark_triad::DarkTriadProfile;
use super::hexaco::HexacoProfile;
use super::mbti::{self, MbtiAxis, MbtiProfile};
use super::tci::TciProfile;

const HIGH_HONESTY: f64 = 70.0;
const ELEVATED_DARKNESS: f64 = 50.0;
const HIGH_SELF_DIRECTEDNESS: f64 = 70.0;
const HIGH_IMPULSIVENESS: f64 = 70.0;

/// Factors shared by Big Five and HEXACO.
const SHARED_HEXACO_FACTORS: [BigFiveTrait; 4] = [
    BigFiveTrait::Extraversion,
    BigFiveTrait::Agreeableness,
    BigFiveTrait::Conscientiousness,
    BigFiveTrait::Openness,
];

// ============================================================================
// Inputs
// ============================================================================

/// The derived profiles available for a check.  Any subset may be present;
/// a rule runs only when every profile it reads is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedProfiles<'a> {
    pub mbti: Option<&'a MbtiProfile>,
    pub hexaco: Option<&'a HexacoProfile>,
    pub dark_triad: Option<&'a DarkTriadProfile>,
    pub tci: Option<&'a TciProfile>,
}

impl<'a> DerivedProfiles<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mbti(mut self, p: &'a MbtiProfile) -> Self {
        self.mbti = Some(p);
        self
    }

    pub fn with_hexaco(mut self, p: &'a HexacoProfile) -> Self {
        self.hexaco = Some(p);
        self
    }

    pub fn with_dark_triad(mut self, p: &'a DarkTriadProfile) -> Self {
        self.dark_triad = Some(p);
        self
    }

    pub fn with_tci(mut self, p: &'a TciProfile) -> Self {
        self.tci = Some(p);
        self
    }
}

// ============================================================================
// Pairwise measures
// ============================================================================

/// Percentage of MBTI letters that match the Big Five baseline.
pub fn mbti_consistency(traits: &BigFiveTraits, profile: &MbtiProfile) -> f64 {
    let baseline = mbti::convert(traits).mbti_type;
    let matches = MbtiAxis::ALL
        .iter()
        .filter(|axis| baseline.letter(**axis) == profile.mbti_type.letter(**axis))
        .count();
    matches as f64 * 25.0
}

/// HEXACO score for a shared factor.  Neuroticism has no HEXACO counterpart
/// and is never in [`SHARED_HEXACO_FACTORS`]; emotionality stands in for it.
fn hexaco_factor(profile: &HexacoProfile, t: BigFiveTrait) -> f64 {
    match t {
        BigFiveTrait::Extraversion => profile.extraversion,
        BigFiveTrait::Agreeableness => profile.agreeableness,
        BigFiveTrait::Conscientiousness => profile.conscientiousness,
        BigFiveTrait::Openness => profile.openness,
        BigFiveTrait::Neuroticism => profile.emotionality,
    }
}

/// Mean closeness of the four shared factors.  Honesty-Humility and
/// emotionality have no Big Five counterpart and are left out.
pub fn hexaco_consistency(traits: &BigFiveTraits, profile: &HexacoProfile) -> f64 {
    let total: f64 = SHARED_HEXACO_FACTORS
        .iter()
        .map(|t| SCORE_MAX - (traits.get(*t) - hexaco_factor(profile, *t)).abs())
        .sum();
    (total / SHARED_HEXACO_FACTORS.len() as f64).clamp(SCORE_MIN, SCORE_MAX)
}

// ============================================================================
// Coherence rules
// ============================================================================

/// Coherence rules in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceRule {
    /// MBTI E/I letter disagrees with `extraversion > 50`.
    ExtraversionMismatch,
    /// Honesty-Humility above 70 alongside mean darkness above 50.
    HonestyVersusDarkness,
    /// Self-directedness and impulsiveness both above 70.
    DirectedYetImpulsive,
}

impl CoherenceRule {
    pub const ALL: [CoherenceRule; 3] = [
        Self::ExtraversionMismatch,
        Self::HonestyVersusDarkness,
        Self::DirectedYetImpulsive,
    ];

    pub fn penalty(&self) -> f64 {
        match self {
            Self::ExtraversionMismatch => 10.0,
            Self::HonestyVersusDarkness => 15.0,
            Self::DirectedYetImpulsive => 10.0,
        }
    }

    pub fn warning(&self) -> &'static str {
        match self {
            Self::ExtraversionMismatch => {
                "MBTI E/I preference conflicts with Big Five extraversion"
            }
            Self::HonestyVersusDarkness => {
                "High honesty-humility conflicts with elevated dark triad scores"
            }
            Self::DirectedYetImpulsive => {
                "High self-directedness conflicts with high impulsiveness"
            }
        }
    }

    /// `Some(true)` when violated, `None` when a required profile is absent.
    pub fn is_violated(&self, traits: &BigFiveTraits, profiles: &DerivedProfiles<'_>) -> Option<bool> {
        match self {
            Self::ExtraversionMismatch => {
                let m = profiles.mbti?;
                let says_e = m.mbti_type.letter(MbtiAxis::Ei) == MbtiAxis::Ei.high_pole();
                Some(says_e != (traits.extraversion > MIDPOINT))
            }
            Self::HonestyVersusDarkness => {
                let h = profiles.hexaco?;
                let d = profiles.dark_triad?;
                Some(h.honesty_humility > HIGH_HONESTY && d.mean() > ELEVATED_DARKNESS)
            }
            Self::DirectedYetImpulsive => {
                let t = profiles.tci?;
                Some(
                    t.character.self_directedness > HIGH_SELF_DIRECTEDNESS
                        && t.temperament.impulsiveness > HIGH_IMPULSIVENESS,
                )
            }
        }
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// 100 minus rule penalties, floored at 0.
    pub overall_score: f64,
    /// One entry per violated rule, in rule order.
    pub warnings: Vec<String>,
    pub is_consistent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbti_consistency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hexaco_consistency: Option<f64>,
}

/// Score a Big Five vector against whichever derived profiles are supplied.
pub fn score(traits: &BigFiveTraits, profiles: &DerivedProfiles<'_>) -> ConsistencyReport {
    let mut overall_score = SCORE_MAX;
    let mut warnings = Vec::new();

    for rule in CoherenceRule::ALL {
        if rule.is_violated(traits, profiles) == Some(true) {
            warnings.push(rule.warning().to_string());
            overall_score -= rule.penalty();
        }
    }

    ConsistencyReport {
        overall_score: overall_score.max(SCORE_MIN),
        is_consistent: warnings.is_empty(),
        warnings,
        mbti_consistency: profiles.mbti.map(|m| mbti_consistency(traits, m)),
        hexaco_consistency: profiles.hexaco.map(|h| hexaco_consistency(traits, h)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::mbti::MbtiType;
    use crate::persona::{dark_triad, hexaco, tci};

    fn traits(o: f64, c: f64, e: f64, a: f64, n: f64) -> BigFiveTraits {
        BigFiveTraits::new(o, c, e, a, n).unwrap()
    }

    #[test]
    fn test_derived_profiles_are_consistent() {
        let t = traits(70.0, 60.0, 40.0, 55.0, 35.0);
        let m = mbti::convert(&t);
        let h = hexaco::convert(&t);
        let d = dark_triad::convert(&t);
        let c = tci::convert(&t);
        let report = score(
            &t,
            &DerivedProfiles::new()
                .with_mbti(&m)
                .with_hexaco(&h)
                .with_dark_triad(&d)
                .with_tci(&c),
        );
        assert!(report.is_consistent);
        assert_eq!(report.overall_score, 100.0);
        assert_eq!(report.mbti_consistency, Some(100.0));
    }

    #[test]
    fn test_extraversion_mismatch_with_external_introvert() {
        let t = traits(50.0, 50.0, 90.0, 50.0, 50.0);
        let external = MbtiProfile::from_type(MbtiType::Istp);
        let h = hexaco::convert(&t);
        let d = dark_triad::convert(&t);
        let c = tci::convert(&t);
        let report = score(
            &t,
            &DerivedProfiles::new()
                .with_mbti(&external)
                .with_hexaco(&h)
                .with_dark_triad(&d)
                .with_tci(&c),
        );
        assert_eq!(report.overall_score, 90.0);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0], CoherenceRule::ExtraversionMismatch.warning());
        assert!(!report.is_consistent);
        // baseline ESTP vs supplied ISTP
        assert_eq!(report.mbti_consistency, Some(75.0));
    }

    #[test]
    fn test_extraversion_mismatch_at_80() {
        let t = traits(50.0, 50.0, 80.0, 50.0, 50.0);
        for code in ["INTJ", "ISFP", "INFJ"] {
            let external = MbtiProfile::from_type(code.parse().unwrap());
            let report = score(&t, &DerivedProfiles::new().with_mbti(&external));
            assert_eq!(report.warnings.len(), 1);
            assert_eq!(report.overall_score, 90.0);
        }
    }

    #[test]
    fn test_mbti_consistency_steps() {
        let t = traits(80.0, 80.0, 20.0, 20.0, 20.0); // INTJ baseline
        let cases = [
            (MbtiType::Intj, 100.0),
            (MbtiType::Intp, 75.0),
            (MbtiType::Infp, 50.0),
            (MbtiType::Isfp, 25.0),
            (MbtiType::Esfp, 0.0),
        ];
        for (ty, expected) in cases {
            assert_eq!(mbti_consistency(&t, &MbtiProfile::from_type(ty)), expected);
        }
    }

    #[test]
    fn test_hexaco_consistency() {
        let t = traits(60.0, 70.0, 40.0, 50.0, 30.0);
        let h = hexaco::convert(&t);
        // only agreeableness differs, by 10
        assert!((hexaco_consistency(&t, &h) - 97.5).abs() < 1e-9);
    }

    #[test]
    fn test_hexaco_consistency_uses_shared_factors_only() {
        let t = traits(60.0, 70.0, 40.0, 50.0, 30.0);
        let mut h = hexaco::convert(&t);
        h.emotionality = 0.0;
        h.honesty_humility = 100.0;
        assert!((hexaco_consistency(&t, &h) - 97.5).abs() < 1e-9);

        h.openness = 20.0;
        assert!((hexaco_consistency(&t, &h) - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_darkness_and_impulsive_rules_order_and_floor() {
        let t = BigFiveTraits::neutral();
        let mut h = hexaco::convert(&t);
        h.honesty_humility = 85.0;
        let mut d = dark_triad::convert(&t);
        d.machiavellianism = 70.0;
        d.narcissism = 60.0;
        d.psychopathy = 50.0;
        let mut c = tci::convert(&t);
        c.character.self_directedness = 75.0;
        c.temperament.impulsiveness = 80.0;
        let external = MbtiProfile::from_type(MbtiType::Estj);

        let report = score(
            &t,
            &DerivedProfiles::new()
                .with_mbti(&external)
                .with_hexaco(&h)
                .with_dark_triad(&d)
                .with_tci(&c),
        );
        let expected: Vec<String> = CoherenceRule::ALL
            .iter()
            .map(|r| r.warning().to_string())
            .collect();
        assert_eq!(report.warnings, expected);
        assert_eq!(report.overall_score, 65.0);
    }

    #[test]
    fn test_rules_skip_missing_profiles() {
        let t = BigFiveTraits::neutral();
        let report = score(&t, &DerivedProfiles::new());
        assert!(report.is_consistent);
        assert_eq!(report.mbti_consistency, None);
        assert_eq!(report.hexaco_consistency, None);
        assert_eq!(
            CoherenceRule::HonestyVersusDarkness.is_violated(&t, &DerivedProfiles::new()),
            None
        );
    }

    #[test]
    fn test_honesty_versus_darkness_needs_both_conditions() {
        let t = BigFiveTraits::neutral();
        let mut h = hexaco::convert(&t);
        h.honesty_humility = 90.0;
        let d = dark_triad::convert(&t); // mean ≈ 39.4
        let report = score(&t, &DerivedProfiles::new().with_hexaco(&h).with_dark_triad(&d));
        assert!(report.is_consistent);
    }
}
