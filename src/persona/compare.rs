//! Similarity between Big Five vectors.
//!
//! Used to check that several descriptions of the same character (or
//! versions of one character over time) still point the same way.

use serde::{Deserialize, Serialize};

use super::big_five::BigFiveTraits;
use super::error::{PersonaError, Result};

/// Two profiles whose similarity fell under the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairConflict {
    pub left: usize,
    pub right: usize,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// `similarity[i][j]` for every pair; the diagonal is 1.
    pub similarity: Vec<Vec<f64>>,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub threshold: f64,
    pub conflicts: Vec<PairConflict>,
}

impl ComparisonReport {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Cosine similarity of two trait vectors.  Two zero vectors count as
/// identical; a zero and a non-zero vector as unrelated.
pub fn cosine_similarity(a: &BigFiveTraits, b: &BigFiveTraits) -> f64 {
    let (a, b) = (a.values(), b.values());
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    match (norm_a == 0.0, norm_b == 0.0) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        _ => (dot / (norm_a * norm_b)).clamp(-1.0, 1.0),
    }
}

/// Pairwise comparison of two or more profiles.
pub fn compare(profiles: &[BigFiveTraits], threshold: f64) -> Result<ComparisonReport> {
    if profiles.len() < 2 {
        return Err(PersonaError::invalid(format!(
            "comparison needs at least 2 profiles, got {}",
            profiles.len()
        )));
    }
    for (i, p) in profiles.iter().enumerate() {
        p.validate().map_err(|e| match e {
            PersonaError::InvalidInput { fields, message } => PersonaError::InvalidInput {
                fields,
                message: format!("profile {}: {}", i, message),
            },
            other => other,
        })?;
    }

    let n = profiles.len();
    let mut similarity = vec![vec![1.0; n]; n];
    let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
    let mut conflicts = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let s = cosine_similarity(&profiles[i], &profiles[j]);
            similarity[i][j] = s;
            similarity[j][i] = s;
            pairs.push(s);
            if s < threshold {
                conflicts.push(PairConflict {
                    left: i,
                    right: j,
                    similarity: s,
                });
            }
        }
    }

    let min = pairs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = pairs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = pairs.iter().sum::<f64>() / pairs.len() as f64;

    Ok(ComparisonReport {
        similarity,
        min,
        max,
        avg,
        threshold,
        conflicts,
    })
}
