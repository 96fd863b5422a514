//! Structural validation of serialized profiles.
//!
//! Checks operate on `serde_json::Value` so profiles coming back from storage
//! or the wire can be vetted before they are deserialized.  Field names follow
//! this crate's own serialized form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::big_five::{in_score_range, BigFiveTrait};
use super::dark_triad::RiskLevel;
use super::error::{PersonaError, Result};
use super::mbti::MbtiType;
use super::system::PersonalitySystem;

const HEXACO_FIELDS: [&str; 7] = [
    "honesty_humility",
    "emotionality",
    "extraversion",
    "agreeableness",
    "conscientiousness",
    "openness",
    "confidence",
];

const DARK_TRIAD_FIELDS: [&str; 5] = [
    "machiavellianism",
    "narcissism",
    "psychopathy",
    "overall_darkness",
    "confidence",
];

/// Outcome of a structural check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ProfileValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

fn check_scores(obj: &Map<String, Value>, fields: &[&str], errors: &mut Vec<String>) {
    for field in fields {
        match obj.get(*field) {
            None | Some(Value::Null) => errors.push(format!("{} is required", field)),
            Some(v) => match v.as_f64() {
                Some(n) if in_score_range(n) => {}
                Some(n) => errors.push(format!("{} = {} must be between 0 and 100", field, n)),
                None => errors.push(format!("{} must be a number", field)),
            },
        }
    }
}

fn check_object(obj: &Map<String, Value>, field: &str, errors: &mut Vec<String>) {
    if !obj.get(field).map_or(false, Value::is_object) {
        errors.push(format!("{} object is required", field));
    }
}

fn check_mbti(obj: &Map<String, Value>, errors: &mut Vec<String>) {
    match obj.get("type").and_then(Value::as_str) {
        Some(code) if code.chars().count() == 4 => {
            if code.parse::<MbtiType>().is_err() {
                errors.push(format!("type '{}' is not one of the 16 MBTI types", code));
            }
        }
        _ => errors.push("type must be a 4-character string".to_string()),
    }
    check_object(obj, "dimensions", errors);
}

fn check_risk_level(obj: &Map<String, Value>, errors: &mut Vec<String>) {
    match obj.get("risk_level") {
        None | Some(Value::Null) => errors.push("risk_level is required".to_string()),
        Some(v) => {
            if serde_json::from_value::<RiskLevel>(v.clone()).is_err() {
                errors.push(format!(
                    "risk_level {} is not one of LOW, MODERATE, HIGH, EXTREME",
                    v
                ));
            }
        }
    }
}

/// Check a serialized profile of `system`.
pub fn validate_profile(system: PersonalitySystem, data: &Value) -> ProfileValidation {
    let Some(obj) = data.as_object() else {
        return ProfileValidation::from_errors(vec![format!("{} profile must be an object", system)]);
    };

    let mut errors = Vec::new();
    match system {
        PersonalitySystem::BigFive => {
            let names: Vec<&str> = BigFiveTrait::ALL.iter().map(|t| t.name()).collect();
            check_scores(obj, &names, &mut errors);
        }
        PersonalitySystem::Mbti => check_mbti(obj, &mut errors),
        PersonalitySystem::Hexaco => check_scores(obj, &HEXACO_FIELDS, &mut errors),
        PersonalitySystem::DarkTriad => {
            check_scores(obj, &DARK_TRIAD_FIELDS, &mut errors);
            check_risk_level(obj, &mut errors);
        }
        PersonalitySystem::Tci => {
            check_object(obj, "temperament", &mut errors);
            check_object(obj, "character", &mut errors);
        }
    }
    ProfileValidation::from_errors(errors)
}

/// [`validate_profile`] keyed by system name.
pub fn validate_profile_named(system: &str, data: &Value) -> Result<ProfileValidation> {
    let system: PersonalitySystem = system.parse()?;
    Ok(validate_profile(system, data))
}

/// Fail with [`PersonaError::MalformedProfile`] unless the profile is valid.
pub fn ensure_valid_profile(system: PersonalitySystem, data: &Value) -> Result<()> {
    let outcome = validate_profile(system, data);
    if outcome.is_valid {
        Ok(())
    } else {
        Err(PersonaError::MalformedProfile {
            system: system.to_string(),
            errors: outcome.errors,
        })
    }
}
