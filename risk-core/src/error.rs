//! Error taxonomy
//!
//! Three request-level conditions (`RiskError`) plus the lower-level causes
//! they carry. Vector building never produces an error for a single bad
//! field; those fall back to defaults in `features::builder`.

use std::path::PathBuf;
use thiserror::Error;

use crate::disease::Disease;

pub type RiskResult<T> = Result<T, RiskError>;

/// Request-level failure, mapped 1:1 onto a response status by the server.
#[derive(Debug, Error)]
pub enum RiskError {
    /// No artifact is loaded for the requested disease.
    #[error("{} model not initialized", .0.display_name())]
    ModelUnavailable(Disease),

    /// The input cannot be turned into a usable vector at all.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Scaler or classifier rejected the vector.
    #[error("{disease} inference failed: {source}")]
    InferenceFailure {
        disease: Disease,
        #[source]
        source: InferenceError,
    },
}

/// Failure inside the Scaler/Predictor Adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("{stage} expects {expected} features, got {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A finite input overflowed once scaled; the caller sent it.
    #[error("feature {index} is out of range after scaling")]
    NonFiniteInput { index: usize },

    #[error("classifier produced an invalid probability: {0}")]
    InvalidProbability(f64),

    #[error("{0}")]
    Backend(String),
}

/// Feature schema construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("feature schema is empty")]
    Empty,

    #[error("duplicate feature column: {0}")]
    DuplicateColumn(String),
}

/// Artifact could not be loaded or failed its load-time checks.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid feature schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("{disease} artifact requires a stored feature list")]
    MissingFeatures { disease: Disease },

    #[error("stored feature list does not match the {disease} input profile (expected {expected:?}, got {actual:?})")]
    FeatureMismatch {
        disease: Disease,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("invalid artifact: {0}")]
    Invalid(String),
}
