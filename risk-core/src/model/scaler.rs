//! Feature Scalers - fitted transforms applied before classification
//!
//! Parameters were fixed at training time and arrive through the artifact.
//! Implementations are pure; `transform` only fails on a length mismatch.

use std::sync::Arc;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, InferenceError};

// ============================================================================
// SCALER TRAIT
// ============================================================================

/// Trait for fitted feature transforms (standardisation, min-max, ...)
pub trait FeatureScaler: Send + Sync + std::fmt::Debug {
    /// Number of features the transform was fitted on
    fn input_dim(&self) -> usize;

    fn transform(&self, input: ArrayView1<'_, f64>) -> Result<Array1<f64>, InferenceError>;

    fn kind(&self) -> &'static str;
}

fn check_dim(expected: usize, input: &ArrayView1<'_, f64>) -> Result<(), InferenceError> {
    if input.len() != expected {
        return Err(InferenceError::DimensionMismatch {
            stage: "scaler",
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}

fn check_params(name: &str, a: &[f64], b: &[f64]) -> Result<(), ArtifactError> {
    if a.is_empty() {
        return Err(ArtifactError::Invalid(format!("{} scaler has no parameters", name)));
    }
    if a.len() != b.len() {
        return Err(ArtifactError::Invalid(format!(
            "{} scaler parameter lengths differ ({} vs {})",
            name, a.len(), b.len()
        )));
    }
    if a.iter().chain(b.iter()).any(|v| !v.is_finite()) {
        return Err(ArtifactError::Invalid(format!("{} scaler has non-finite parameters", name)));
    }
    Ok(())
}

// ============================================================================
// STANDARD SCALER
// ============================================================================

/// `(x - mean) / scale`, scikit-learn `StandardScaler` semantics
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        check_params("standard", &mean, &scale)?;
        // Zero-variance columns were fitted with scale 1
        let scale = scale.into_iter().map(|s| if s == 0.0 { 1.0 } else { s }).collect::<Vec<_>>();
        Ok(Self {
            mean: Array1::from(mean),
            scale: Array1::from(scale),
        })
    }
}

impl FeatureScaler for StandardScaler {
    fn input_dim(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, input: ArrayView1<'_, f64>) -> Result<Array1<f64>, InferenceError> {
        check_dim(self.input_dim(), &input)?;
        Ok((&input - &self.mean) / &self.scale)
    }

    fn kind(&self) -> &'static str {
        "standard"
    }
}

// ============================================================================
// MIN-MAX SCALER
// ============================================================================

/// `(x - min) / (max - min)`, unclipped
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    data_min: Array1<f64>,
    range: Array1<f64>,
}

impl MinMaxScaler {
    pub fn new(data_min: Vec<f64>, data_max: Vec<f64>) -> Result<Self, ArtifactError> {
        check_params("min_max", &data_min, &data_max)?;
        let range = data_min
            .iter()
            .zip(data_max.iter())
            .map(|(lo, hi)| (hi - lo).max(1e-8))
            .collect::<Vec<_>>();
        Ok(Self {
            data_min: Array1::from(data_min),
            range: Array1::from(range),
        })
    }
}

impl FeatureScaler for MinMaxScaler {
    fn input_dim(&self) -> usize {
        self.data_min.len()
    }

    fn transform(&self, input: ArrayView1<'_, f64>) -> Result<Array1<f64>, InferenceError> {
        check_dim(self.input_dim(), &input)?;
        Ok((&input - &self.data_min) / &self.range)
    }

    fn kind(&self) -> &'static str {
        "min_max"
    }
}

// ============================================================================
// SERIALIZED FORM
// ============================================================================

/// Scaler section of an artifact file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScalerSpec {
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    MinMax { data_min: Vec<f64>, data_max: Vec<f64> },
}

impl ScalerSpec {
    pub fn build(self) -> Result<Arc<dyn FeatureScaler>, ArtifactError> {
        let scaler: Arc<dyn FeatureScaler> = match self {
            ScalerSpec::Standard { mean, scale } => Arc::new(StandardScaler::new(mean, scale)?),
            ScalerSpec::MinMax { data_min, data_max } => Arc::new(MinMaxScaler::new(data_min, data_max)?),
        };
        Ok(scaler)
    }
}
