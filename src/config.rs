//! Engine configuration.
//!
//! Only policy knobs live here.  The conversion coefficients are fixed
//! constants in each converter and cannot be overridden.
//!
//! # Example YAML
//!
//! ```yaml
//! comparison:
//!   conflict_threshold: 0.7
//! growth:
//!   rate_per_year: 0.05
//! risk_bands:
//!   moderate: 25.0
//!   high: 50.0
//!   extreme: 75.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persona::dark_triad::RiskBands;
use crate::persona::error::{PersonaError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Minimum pairwise cosine similarity before a conflict is flagged.
    #[serde(default = "default_conflict_threshold")]
    pub conflict_threshold: f64,
}

fn default_conflict_threshold() -> f64 {
    0.7
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            conflict_threshold: default_conflict_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Exponential maturation rate of character dimensions, per year.
    #[serde(default = "default_growth_rate")]
    pub rate_per_year: f64,
}

fn default_growth_rate() -> f64 {
    0.05
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            rate_per_year: default_growth_rate(),
        }
    }
}

/// Top-level engine configuration.  Every section is optional in YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub comparison: ComparisonConfig,
    #[serde(default)]
    pub growth: GrowthConfig,
    #[serde(default)]
    pub risk_bands: RiskBands,
}

impl EngineConfig {
    /// Parse and validate a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.comparison.conflict_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(PersonaError::Config(format!(
                "comparison.conflict_threshold = {} is outside 0.0..1.0",
                threshold
            )));
        }
        let rate = self.growth.rate_per_year;
        if !rate.is_finite() || rate < 0.0 {
            return Err(PersonaError::Config(format!(
                "growth.rate_per_year = {} must be finite and non-negative",
                rate
            )));
        }
        self.risk_bands.validate()
    }
}
