//! Trait adaptation hooks.
//!
//! An adapter rewrites a validated Big Five vector before conversion, for
//! example to apply a regional norm.  The crate ships no norms of its own;
//! [`TraitScaling`] is a generic multiplier table that callers fill in.

use serde::{Deserialize, Serialize};

use super::big_five::{BigFiveTrait, BigFiveTraits};

/// Pre-conversion rewrite of a trait vector.
///
/// The engine clamps the output back into [0, 100] before use, so an
/// adapter does not need to.
pub trait TraitAdapter: Send + Sync {
    fn name(&self) -> &str;
    fn adapt(&self, traits: &BigFiveTraits) -> BigFiveTraits;
}

/// Per-trait multipliers.  Traits without an entry are left alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitScaling {
    pub name: String,
    #[serde(default)]
    pub factors: Vec<(BigFiveTrait, f64)>,
}

impl TraitScaling {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factors: Vec::new(),
        }
    }

    /// Add (or replace) the multiplier for one trait.
    pub fn with_factor(mut self, t: BigFiveTrait, factor: f64) -> Self {
        self.factors.retain(|(existing, _)| *existing != t);
        self.factors.push((t, factor));
        self
    }

    fn factor(&self, t: BigFiveTrait) -> f64 {
        self.factors
            .iter()
            .find(|(existing, _)| *existing == t)
            .map(|(_, f)| *f)
            .unwrap_or(1.0)
    }
}

impl TraitAdapter for TraitScaling {
    fn name(&self) -> &str {
        &self.name
    }

    fn adapt(&self, traits: &BigFiveTraits) -> BigFiveTraits {
        BigFiveTraits {
            openness: traits.openness * self.factor(BigFiveTrait::Openness),
            conscientiousness: traits.conscientiousness
                * self.factor(BigFiveTrait::Conscientiousness),
            extraversion: traits.extraversion * self.factor(BigFiveTrait::Extraversion),
            agreeableness: traits.agreeableness * self.factor(BigFiveTrait::Agreeableness),
            neuroticism: traits.neuroticism * self.factor(BigFiveTrait::Neuroticism),
        }
        .clamped()
    }
}
