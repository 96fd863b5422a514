//! Big Five (OCEAN) trait vector — the sole input to every converter.
//!
//! Scores live on a 0–100 scale.  [`BigFiveTraits`] is the validated form;
//! [`BigFiveInput`] is the loose form read from callers, where any field may
//! be missing, and converts into `BigFiveTraits` only when all five fields are
//! present, finite, and in range.

use serde::{Deserialize, Serialize};

use super::error::{PersonaError, Result};

/// Lower bound of every trait and derived score.
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of every trait and derived score.
pub const SCORE_MAX: f64 = 100.0;
/// Scale midpoint used by threshold rules.
pub const MIDPOINT: f64 = 50.0;

/// Values below this count as extreme-low.
const EXTREME_LOW: f64 = 20.0;
/// Values above this count as extreme-high.
const EXTREME_HIGH: f64 = 80.0;

// ============================================================================
// Axis enum
// ============================================================================

/// One of the five OCEAN axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    /// All five axes in canonical O-C-E-A-N order.
    pub const ALL: [BigFiveTrait; 5] = [
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Neuroticism,
    ];

    /// Field name as it appears in serialized profiles.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }
}

impl std::fmt::Display for BigFiveTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `value` is a finite score inside [0, 100].
pub fn in_score_range(value: f64) -> bool {
    value.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&value)
}

// ============================================================================
// Validated trait vector
// ============================================================================

/// A validated Big Five vector.  Every field is within [0, 100].
///
/// Deserialization goes through [`BigFiveInput`], so documents with missing or
/// out-of-range fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BigFiveInput")]
pub struct BigFiveTraits {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl BigFiveTraits {
    /// Build and validate a trait vector.
    pub fn new(
        openness: f64,
        conscientiousness: f64,
        extraversion: f64,
        agreeableness: f64,
        neuroticism: f64,
    ) -> Result<Self> {
        let traits = Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        };
        traits.validate()?;
        Ok(traits)
    }

    /// Every trait at the scale midpoint.
    pub fn neutral() -> Self {
        Self {
            openness: MIDPOINT,
            conscientiousness: MIDPOINT,
            extraversion: MIDPOINT,
            agreeableness: MIDPOINT,
            neuroticism: MIDPOINT,
        }
    }

    /// Score for a single axis.
    pub fn get(&self, t: BigFiveTrait) -> f64 {
        match t {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }

    /// Scores in O-C-E-A-N order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        ]
    }

    /// Axes whose value is missing a finite in-range score.
    pub fn out_of_range(&self) -> Vec<BigFiveTrait> {
        BigFiveTrait::ALL
            .into_iter()
            .filter(|t| !in_score_range(self.get(*t)))
            .collect()
    }

    /// Check every field is finite and inside [0, 100].
    pub fn validate(&self) -> Result<()> {
        let bad = self.out_of_range();
        if bad.is_empty() {
            return Ok(());
        }
        let details: Vec<String> = bad
            .iter()
            .map(|t| format!("{} = {}", t, self.get(*t)))
            .collect();
        Err(PersonaError::InvalidInput {
            fields: bad.iter().map(|t| t.name().to_string()).collect(),
            message: format!("out of range [0, 100]: {}", details.join(", ")),
        })
    }

    /// Convenience boolean form of [`validate`](Self::validate).
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Arithmetic mean of the five scores.
    pub fn mean(&self) -> f64 {
        self.values().iter().sum::<f64>() / 5.0
    }

    /// Population variance of the five scores.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.values()
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / 5.0
    }

    /// Number of scores below 20 or above 80.
    pub fn extreme_count(&self) -> usize {
        self.values()
            .iter()
            .filter(|v| **v < EXTREME_LOW || **v > EXTREME_HIGH)
            .count()
    }

    /// Clamp every field into [0, 100].  Non-finite values fall to the midpoint.
    pub fn clamped(&self) -> Self {
        let c = |v: f64| {
            if v.is_finite() {
                v.clamp(SCORE_MIN, SCORE_MAX)
            } else {
                MIDPOINT
            }
        };
        Self {
            openness: c(self.openness),
            conscientiousness: c(self.conscientiousness),
            extraversion: c(self.extraversion),
            agreeableness: c(self.agreeableness),
            neuroticism: c(self.neuroticism),
        }
    }
}

// ============================================================================
// Loose input form
// ============================================================================

/// Big Five vector as supplied by a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BigFiveInput {
    #[serde(default)]
    pub openness: Option<f64>,
    #[serde(default)]
    pub conscientiousness: Option<f64>,
    #[serde(default)]
    pub extraversion: Option<f64>,
    #[serde(default)]
    pub agreeableness: Option<f64>,
    #[serde(default)]
    pub neuroticism: Option<f64>,
}

impl BigFiveInput {
    fn field(&self, t: BigFiveTrait) -> Option<f64> {
        match t {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }

    /// Validate and convert.  Reports every missing or out-of-range field at
    /// once rather than stopping at the first.
    pub fn into_traits(self) -> Result<BigFiveTraits> {
        let mut fields = Vec::new();
        let mut problems = Vec::new();
        for t in BigFiveTrait::ALL {
            match self.field(t) {
                None => {
                    fields.push(t.name().to_string());
                    problems.push(format!("{} is missing", t));
                }
                Some(v) if !in_score_range(v) => {
                    fields.push(t.name().to_string());
                    problems.push(format!("{} = {} is outside [0, 100]", t, v));
                }
                Some(_) => {}
            }
        }
        if !fields.is_empty() {
            return Err(PersonaError::InvalidInput {
                fields,
                message: problems.join(", "),
            });
        }
        Ok(BigFiveTraits {
            openness: self.openness.unwrap_or(MIDPOINT),
            conscientiousness: self.conscientiousness.unwrap_or(MIDPOINT),
            extraversion: self.extraversion.unwrap_or(MIDPOINT),
            agreeableness: self.agreeableness.unwrap_or(MIDPOINT),
            neuroticism: self.neuroticism.unwrap_or(MIDPOINT),
        })
    }

    /// Parse a YAML (or JSON) document into a validated vector.
    pub fn parse_traits(doc: &str) -> Result<BigFiveTraits> {
        let input: BigFiveInput = serde_yaml::from_str(doc)?;
        input.into_traits()
    }
}

impl TryFrom<BigFiveInput> for BigFiveTraits {
    type Error = PersonaError;

    fn try_from(input: BigFiveInput) -> Result<Self> {
        input.into_traits()
    }
}

impl From<BigFiveTraits> for BigFiveInput {
    fn from(t: BigFiveTraits) -> Self {
        Self {
            openness: Some(t.openness),
            conscientiousness: Some(t.conscientiousness),
            extraversion: Some(t.extraversion),
            agreeableness: Some(t.agreeableness),
            neuroticism: Some(t.neuroticism),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_statistics() {
        let t = BigFiveTraits::neutral();
        assert_eq!(t.mean(), 50.0);
        assert_eq!(t.variance(), 0.0);
        assert_eq!(t.extreme_count(), 0);
        assert!(t.is_valid());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = BigFiveTraits::new(50.0, 101.0, 50.0, -1.0, 50.0).unwrap_err();
        match err {
            PersonaError::InvalidInput { fields, .. } => {
                assert_eq!(fields, vec!["conscientiousness", "agreeableness"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nan_is_invalid() {
        let t = BigFiveTraits {
            neuroticism: f64::NAN,
            ..BigFiveTraits::neutral()
        };
        assert_eq!(t.out_of_range(), vec![BigFiveTrait::Neuroticism]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(BigFiveTraits::new(0.0, 100.0, 0.0, 100.0, 0.0).is_ok());
    }

    #[test]
    fn test_extreme_count_is_strict() {
        let t = BigFiveTraits::new(20.0, 80.0, 19.9, 80.1, 50.0).unwrap();
        assert_eq!(t.extreme_count(), 2);
    }

    #[test]
    fn test_variance_is_population() {
        let t = BigFiveTraits::new(0.0, 100.0, 50.0, 50.0, 50.0).unwrap();
        // deviations: 50², 50², 0, 0, 0 → 5000 / 5
        assert!((t.variance() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_reports_all_missing_fields() {
        let input = BigFiveInput {
            openness: Some(40.0),
            extraversion: Some(120.0),
            ..Default::default()
        };
        match input.into_traits().unwrap_err() {
            PersonaError::InvalidInput { fields, message } => {
                assert_eq!(
                    fields,
                    vec![
                        "conscientiousness",
                        "extraversion",
                        "agreeableness",
                        "neuroticism"
                    ]
                );
                assert!(message.contains("extraversion = 120"));
                assert!(message.contains("neuroticism is missing"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_traits_accepts_yaml_and_json() {
        let yaml = "openness: 80\nconscientiousness: 70\nextraversion: 30\nagreeableness: 60\nneuroticism: 10\n";
        let t = BigFiveInput::parse_traits(yaml).unwrap();
        assert_eq!(t.openness, 80.0);
        assert_eq!(t.neuroticism, 10.0);

        let json = r#"{"openness": 1, "conscientiousness": 2, "extraversion": 3, "agreeableness": 4, "neuroticism": 5}"#;
        let t = BigFiveInput::parse_traits(json).unwrap();
        assert_eq!(t.values(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let doc = r#"{"openness": 500, "conscientiousness": -3, "extraversion": 50, "agreeableness": 50, "neuroticism": 50}"#;
        let err = serde_json::from_str::<BigFiveTraits>(doc).unwrap_err();
        assert!(err.to_string().contains("openness = 500 is outside [0, 100]"));
        assert!(err.to_string().contains("conscientiousness = -3 is outside [0, 100]"));

        assert!(serde_json::from_str::<BigFiveTraits>(r#"{"openness": 50}"#).is_err());

        let t: BigFiveTraits = serde_json::from_str(
            r#"{"openness": 0, "conscientiousness": 100, "extraversion": 50, "agreeableness": 50, "neuroticism": 50}"#,
        )
        .unwrap();
        assert_eq!(t.values(), [0.0, 100.0, 50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_clamped() {
        let t = BigFiveTraits {
            openness: 130.0,
            conscientiousness: -4.0,
            extraversion: f64::INFINITY,
            agreeableness: 42.0,
            neuroticism: 100.0,
        };
        let c = t.clamped();
        assert_eq!(c.values(), [100.0, 0.0, 50.0, 42.0, 100.0]);
    }
}
