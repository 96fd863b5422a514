//! Persona systems — one Big Five vector, four derived personality models.
//!
//! Every converter is a pure function of a validated [`BigFiveTraits`].  The
//! engine runs them all and scores how well the results agree.  Nothing is
//! cached and nothing is mutated after construction, so calls can run in
//! parallel without coordination.
//!
//! # Architecture
//!
//! ```text
//! BigFiveInput (loose, optional fields)
//!   ↓  validate → InvalidInput on any missing / out-of-range field
//! BigFiveTraits [O, C, E, A, N] ∈ [0, 100]
//!   ├─ mbti::convert        → MbtiProfile     (type + 4 axis strengths)
//!   ├─ hexaco::convert      → HexacoProfile   (6 factors, synthesized H)
//!   ├─ dark_triad::convert  → DarkTriadProfile (M, N, P + risk band)
//!   └─ tci::convert         → TciProfile      (temperament | character)
//!   ↓
//! consistency::score (three coherence rules, fixed order)
//!   ↓
//! UnifiedProfile { big_five, mbti, hexaco, dark_triad, tci, consistency }
//! ```

pub mod adaptation;
pub mod big_five;
pub mod compare;
pub mod consistency;
pub mod dark_triad;
pub mod engine;
pub mod error;
pub mod hexaco;
pub mod mbti;
pub mod system;
pub mod tci;
pub mod validation;

// Re-exports
pub use adaptation::{TraitAdapter, TraitScaling};
pub use big_five::{BigFiveInput, BigFiveTrait, BigFiveTraits};
pub use compare::{compare, cosine_similarity, ComparisonReport, PairConflict};
pub use consistency::{CoherenceRule, ConsistencyReport, DerivedProfiles};
pub use dark_triad::{
    content_advisory, ContentAdvisory, DarkTriadProfile, RiskBands, RiskLevel, WarningTier,
};
pub use engine::{recommended_systems, Archetype, PersonalityEngine, UnifiedProfile};
pub use error::{PersonaError, Result};
pub use hexaco::HexacoProfile;
pub use mbti::{DimensionScore, MbtiAxis, MbtiDimensions, MbtiProfile, MbtiType};
pub use system::{PersonalitySystem, SystemProfile};
pub use tci::{GrowthProjection, TciCharacter, TciProfile, TciTemperament};
pub use validation::{ensure_valid_profile, validate_profile, ProfileValidation};
