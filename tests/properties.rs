//! Property tests: every derived score stays on its declared scale and the
//! converters are deterministic.

use persona_systems::persona::{
    dark_triad, hexaco, mbti, BigFiveTraits, MbtiProfile, MbtiType, PersonalityEngine, UnifiedProfile,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn arb_score() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(50.0),
        Just(100.0),
        0.0..=100.0f64,
    ]
}

fn arb_traits() -> impl Strategy<Value = BigFiveTraits> {
    (arb_score(), arb_score(), arb_score(), arb_score(), arb_score()).prop_map(|(o, c, e, a, n)| {
        BigFiveTraits {
            openness: o,
            conscientiousness: c,
            extraversion: e,
            agreeableness: a,
            neuroticism: n,
        }
    })
}

fn in_range(v: f64) -> bool {
    (0.0..=100.0).contains(&v)
}

fn all_scores(p: &UnifiedProfile) -> Vec<f64> {
    let t = &p.tci.temperament;
    let c = &p.tci.character;
    vec![
        p.mbti.dimensions.ei.strength,
        p.mbti.dimensions.sn.strength,
        p.mbti.dimensions.tf.strength,
        p.mbti.dimensions.jp.strength,
        p.mbti.confidence,
        p.hexaco.honesty_humility,
        p.hexaco.emotionality,
        p.hexaco.extraversion,
        p.hexaco.agreeableness,
        p.hexaco.conscientiousness,
        p.hexaco.openness,
        p.hexaco.confidence,
        p.dark_triad.machiavellianism,
        p.dark_triad.narcissism,
        p.dark_triad.psychopathy,
        p.dark_triad.overall_darkness,
        p.dark_triad.confidence,
        t.novelty_seeking_curiosity,
        t.impulsiveness,
        t.extravagance,
        t.disorderliness,
        t.harm_avoidance,
        t.reward_dependence,
        t.persistence,
        c.self_directedness,
        c.cooperativeness,
        c.self_transcendence,
        p.tci.confidence,
        p.consistency.overall_score,
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn derived_scores_stay_in_range(traits in arb_traits()) {
        let profile = PersonalityEngine::new().generate_all(&traits).unwrap();
        for (i, v) in all_scores(&profile).into_iter().enumerate() {
            prop_assert!(in_range(v), "score #{} = {} out of range", i, v);
        }
    }

    #[test]
    fn confidence_floors_and_caps(traits in arb_traits()) {
        let profile = PersonalityEngine::new().generate_all(&traits).unwrap();
        prop_assert!(profile.tci.confidence >= 60.0);
        prop_assert!(profile.mbti.confidence >= 20.0 && profile.mbti.confidence <= 100.0);
        prop_assert!(profile.hexaco.confidence <= 100.0);
    }

    #[test]
    fn mbti_is_idempotent(traits in arb_traits()) {
        let first = mbti::convert(&traits);
        let second = mbti::convert(&traits);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn engine_output_is_self_consistent(traits in arb_traits()) {
        let profile = PersonalityEngine::new().generate_all(&traits).unwrap();
        prop_assert_eq!(profile.consistency.mbti_consistency, Some(100.0));
        prop_assert_eq!(profile.consistency.is_consistent, profile.consistency.warnings.is_empty());
    }

    #[test]
    fn extravert_with_introvert_type_loses_ten(
        traits in arb_traits(),
        e in 50.5..=100.0f64,
        ty in prop::sample::select(MbtiType::ALL.to_vec()),
    ) {
        prop_assume!(ty.code().starts_with('I'));
        let traits = BigFiveTraits { extraversion: e, ..traits };
        let engine = PersonalityEngine::new();
        let baseline = engine.generate_all(&traits).unwrap().consistency;
        let report = engine.check_external_mbti(&traits, ty).unwrap();
        prop_assert_eq!(report.warnings.len(), baseline.warnings.len() + 1);
        prop_assert_eq!(report.overall_score, (baseline.overall_score - 10.0).max(0.0));
        let external = MbtiProfile::from_type(ty);
        prop_assert_eq!(external.mbti_type.code().chars().next(), Some('I'));
    }

    #[test]
    fn dark_triad_variants_agree(
        traits in arb_traits(),
        a in 10.0..=100.0f64,
        n in 0.0..=70.0f64,
    ) {
        // emotionality = n + 0.2·a stays below saturation for these ranges
        let traits = BigFiveTraits { agreeableness: a, neuroticism: n, ..traits };
        let direct = dark_triad::convert(&traits);
        let via = dark_triad::convert_from_hexaco(&hexaco::convert(&traits));
        prop_assert!((direct.machiavellianism - via.machiavellianism).abs() < 1e-6);
        prop_assert!((direct.narcissism - via.narcissism).abs() < 1e-6);
        prop_assert!((direct.psychopathy - via.psychopathy).abs() < 1e-6);
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn boundary_extraversion_is_introvert() {
    let traits = BigFiveTraits {
        extraversion: 50.0,
        ..BigFiveTraits::neutral()
    };
    assert_eq!(mbti::convert(&traits).dimensions.ei.preference, 'I');
}

#[test]
fn neutral_vector_scenario() {
    let p = PersonalityEngine::new()
        .generate_all(&BigFiveTraits::neutral())
        .unwrap();
    assert_eq!(p.mbti.mbti_type, MbtiType::Istp);
    assert_eq!(p.mbti.confidence, 20.0);
    assert!(p.consistency.is_consistent);
}
