//! Persona conversion errors.

use thiserror::Error;

/// Errors raised by the conversion engine and its loaders.
///
/// Consistency warnings are never errors; they travel inside the
/// [`ConsistencyReport`](super::consistency::ConsistencyReport).
#[derive(Debug, Error)]
pub enum PersonaError {
    /// Malformed or out-of-range input.  `fields` names every offending
    /// Big Five field (canonical O-C-E-A-N order) when the input is a trait
    /// vector, and is empty otherwise.
    #[error("Invalid input: {message}")]
    InvalidInput {
        fields: Vec<String>,
        message: String,
    },

    /// Conversion or validation target outside the supported set.
    #[error("Unsupported personality system: {0}")]
    UnsupportedSystem(String),

    /// Structural validation of a derived profile failed.
    #[error("Malformed {system} profile: {}", .errors.join("; "))]
    MalformedProfile { system: String, errors: Vec<String> },

    /// Engine configuration is semantically invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PersonaError {
    /// Shorthand for an [`InvalidInput`](Self::InvalidInput) that is not tied
    /// to specific trait fields.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            fields: Vec::new(),
            message: message.into(),
        }
    }
}

/// Result alias for persona operations.
pub type Result<T> = std::result::Result<T, PersonaError>;
