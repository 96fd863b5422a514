//! # persona-systems
//!
//! Deterministic conversion of a Big Five (OCEAN) personality vector into
//! MBTI, HEXACO, Dark Triad and TCI representations, with cross-system
//! consistency scoring.
//!
//! The engine is synchronous and stateless.  Callers that need persistence,
//! transport or async boundaries wrap it themselves.
//!
//! ```rust
//! use persona_systems::persona::{BigFiveTraits, PersonalityEngine};
//!
//! let engine = PersonalityEngine::new();
//! let traits = BigFiveTraits::new(80.0, 80.0, 20.0, 20.0, 20.0).unwrap();
//! let profile = engine.generate_all(&traits).unwrap();
//! assert_eq!(profile.mbti.mbti_type.code(), "INTJ");
//! ```

pub mod cli;
pub mod config;
pub mod persona;

// Re-exports
pub use config::EngineConfig;
pub use persona::{
    BigFiveTraits, PersonaError, PersonalityEngine, PersonalitySystem, UnifiedProfile,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
