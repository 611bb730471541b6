//! Model Artifacts - immutable {schema, scaler, classifier} bundles
//!
//! One JSON file per disease, exported from the offline training jobs:
//!
//! ```json
//! {
//!   "features": ["age", "sex", "cp_1", "..."],
//!   "model_source": "Scikit-Learn LogisticRegression",
//!   "scaler": { "type": "standard", "mean": [...], "scale": [...] },
//!   "classifier": { "type": "logistic_regression", "coefficients": [...], "intercept": -0.3 }
//! }
//! ```
//!
//! `features` is required for dynamic-schema models and optional for fixed
//! ones; when present on a fixed model it must match the input profile.
//! All dimension checks happen here, at load time, so a drifted artifact is
//! rejected before it can serve a request.

use std::path::Path;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::disease::Disease;
use crate::error::{ArtifactError, InferenceError};
use crate::features::{build_vector, FeatureSchema, FeatureVector, RawInputRecord};
use super::classifier::{ClassifierSpec, ProbabilityClassifier};
use super::inference;
use super::scaler::{FeatureScaler, ScalerSpec};

/// Reported when an artifact does not name its origin
pub const DEFAULT_MODEL_SOURCE: &str = "Scikit-Learn (exported artifact)";

// ============================================================================
// SERIALIZED BUNDLE
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_source: Option<String>,
    pub scaler: ScalerSpec,
    pub classifier: ClassifierSpec,
}

// ============================================================================
// METADATA
// ============================================================================

/// Load-time facts about an artifact, for logs and status output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub disease: Disease,
    pub path: Option<String>,
    pub sha256: Option<String>,
    pub schema_fingerprint: String,
    pub feature_count: usize,
    pub scaler: String,
    pub classifier: String,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// MODEL ARTIFACT
// ============================================================================

#[derive(Debug)]
pub struct ModelArtifact {
    disease: Disease,
    schema: FeatureSchema,
    scaler: Arc<dyn FeatureScaler>,
    classifier: Arc<dyn ProbabilityClassifier>,
    model_source: String,
    metadata: ArtifactMetadata,
}

impl ModelArtifact {
    /// Assemble an artifact from parts, checking that the schema fits the
    /// disease profile and both transforms.
    pub fn new(
        disease: Disease,
        schema: FeatureSchema,
        scaler: Arc<dyn FeatureScaler>,
        classifier: Arc<dyn ProbabilityClassifier>,
        model_source: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        if let Some(expected) = disease.profile().fixed_columns() {
            if schema.columns().iter().map(String::as_str).ne(expected.iter().copied()) {
                return Err(ArtifactError::FeatureMismatch {
                    disease,
                    expected: expected.iter().map(|s| s.to_string()).collect(),
                    actual: schema.columns().to_vec(),
                });
            }
        }

        if scaler.input_dim() != schema.len() {
            return Err(ArtifactError::Invalid(format!(
                "scaler expects {} features, schema has {}",
                scaler.input_dim(), schema.len()
            )));
        }
        if classifier.input_dim() != schema.len() {
            return Err(ArtifactError::Invalid(format!(
                "classifier expects {} features, schema has {}",
                classifier.input_dim(), schema.len()
            )));
        }

        let metadata = ArtifactMetadata {
            disease,
            path: None,
            sha256: None,
            schema_fingerprint: format!("{:08x}", schema.fingerprint()),
            feature_count: schema.len(),
            scaler: scaler.kind().to_string(),
            classifier: classifier.kind().to_string(),
            loaded_at: Utc::now(),
        };

        Ok(Self {
            disease,
            schema,
            scaler,
            classifier,
            model_source: model_source.into(),
            metadata,
        })
    }

    /// Resolve the schema for `disease` and build both transforms
    pub fn from_bundle(disease: Disease, bundle: ArtifactBundle) -> Result<Self, ArtifactError> {
        let schema = match (disease.profile().fixed_columns(), bundle.features) {
            (Some(expected), Some(stored)) => {
                if stored.iter().map(String::as_str).ne(expected.iter().copied()) {
                    return Err(ArtifactError::FeatureMismatch {
                        disease,
                        expected: expected.iter().map(|s| s.to_string()).collect(),
                        actual: stored,
                    });
                }
                FeatureSchema::new(stored)?
            }
            (Some(expected), None) => FeatureSchema::new(expected)?,
            (None, Some(stored)) => FeatureSchema::new(stored)?,
            (None, None) => return Err(ArtifactError::MissingFeatures { disease }),
        };

        let scaler = bundle.scaler.build()?;
        let classifier = bundle.classifier.build()?;
        let source = bundle
            .model_source
            .unwrap_or_else(|| DEFAULT_MODEL_SOURCE.to_string());

        Self::new(disease, schema, scaler, classifier, source)
    }

    pub fn from_json_slice(disease: Disease, bytes: &[u8]) -> Result<Self, ArtifactError> {
        let bundle: ArtifactBundle = serde_json::from_slice(bytes)?;
        let mut artifact = Self::from_bundle(disease, bundle)?;
        artifact.metadata.sha256 = Some(hex::encode(Sha256::digest(bytes)));
        Ok(artifact)
    }

    /// Load from disk
    pub fn load(disease: Disease, path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut artifact = Self::from_json_slice(disease, &bytes)?;
        artifact.metadata.path = Some(path.display().to_string());

        log::info!(
            "Loaded {} model from {} ({} features, schema {}, {} + {}, sha256 {})",
            disease,
            path.display(),
            artifact.schema.len(),
            artifact.metadata.schema_fingerprint,
            artifact.metadata.scaler,
            artifact.metadata.classifier,
            artifact.metadata.sha256.as_deref().unwrap_or("-"),
        );

        Ok(artifact)
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model_source(&self) -> &str {
        &self.model_source
    }

    pub fn metadata(&self) -> &ArtifactMetadata {
        &self.metadata
    }

    /// Align a raw record to this artifact's schema
    pub fn build_vector(&self, record: &RawInputRecord) -> FeatureVector {
        build_vector(self.disease.profile(), &self.schema, record)
    }

    /// Scale then classify
    pub fn predict_probability(&self, vector: &FeatureVector) -> Result<f64, InferenceError> {
        if !vector.matches(&self.schema) {
            return Err(InferenceError::Backend(format!(
                "feature vector (schema {:08x}, {} values) was not built for this {} model (schema {:08x}, {} columns)",
                vector.schema_fingerprint,
                vector.len(),
                self.disease,
                self.schema.fingerprint(),
                self.schema.len(),
            )));
        }
        inference::predict_probability(self.scaler.as_ref(), self.classifier.as_ref(), vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn diabetes_bundle() -> serde_json::Value {
        let zeros = vec![0.0; 8];
        let ones = vec![1.0; 8];
        json!({
            "scaler": { "type": "standard", "mean": zeros, "scale": ones },
            "classifier": { "type": "logistic_regression", "coefficients": zeros, "intercept": 0.0 }
        })
    }

    #[test]
    fn test_fixed_schema_from_profile() {
        let bytes = serde_json::to_vec(&diabetes_bundle()).unwrap();
        let artifact = ModelArtifact::from_json_slice(Disease::Diabetes, &bytes).unwrap();

        assert_eq!(artifact.schema().len(), 8);
        assert_eq!(artifact.schema().column(6), Some("DiabetesPedigreeFunction"));
        assert_eq!(artifact.model_source(), DEFAULT_MODEL_SOURCE);
        assert_eq!(artifact.metadata().sha256.as_ref().map(|s| s.len()), Some(64));
    }

    #[test]
    fn test_fixed_schema_mismatch_rejected() {
        let mut bundle = diabetes_bundle();
        bundle["features"] = json!([
            "Glucose", "Pregnancies", "BloodPressure", "SkinThickness",
            "Insulin", "BMI", "DiabetesPedigreeFunction", "Age"
        ]);
        let bytes = serde_json::to_vec(&bundle).unwrap();

        let err = ModelArtifact::from_json_slice(Disease::Diabetes, &bytes).unwrap_err();
        assert!(matches!(err, ArtifactError::FeatureMismatch { disease: Disease::Diabetes, .. }));
    }

    #[test]
    fn test_dynamic_schema_requires_features() {
        let bytes = serde_json::to_vec(&json!({
            "scaler": { "type": "standard", "mean": [0.0], "scale": [1.0] },
            "classifier": { "type": "logistic_regression", "coefficients": [0.0], "intercept": 0.0 }
        })).unwrap();

        let err = ModelArtifact::from_json_slice(Disease::Heart, &bytes).unwrap_err();
        assert!(matches!(err, ArtifactError::MissingFeatures { disease: Disease::Heart }));
    }

    #[test]
    fn test_dimension_checked_at_load() {
        let bytes = serde_json::to_vec(&json!({
            "features": ["age", "sex", "cp_1"],
            "scaler": { "type": "standard", "mean": [0.0, 0.0], "scale": [1.0, 1.0] },
            "classifier": { "type": "logistic_regression", "coefficients": [0.0, 0.0, 0.0], "intercept": 0.0 }
        })).unwrap();

        let err = ModelArtifact::from_json_slice(Disease::Heart, &bytes).unwrap_err();
        assert!(err.to_string().contains("scaler expects 2 features, schema has 3"));
    }

    #[test]
    fn test_duplicate_features_rejected() {
        let bytes = serde_json::to_vec(&json!({
            "features": ["age", "age"],
            "scaler": { "type": "standard", "mean": [0.0, 0.0], "scale": [1.0, 1.0] },
            "classifier": { "type": "logistic_regression", "coefficients": [0.0, 0.0], "intercept": 0.0 }
        })).unwrap();

        let err = ModelArtifact::from_json_slice(Disease::Heart, &bytes).unwrap_err();
        assert!(matches!(err, ArtifactError::Schema(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelArtifact::load(Disease::Liver, &dir.path().join("liver_model.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
    }

    #[test]
    fn test_load_from_disk_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diabetes_model.json");
        std::fs::write(&path, serde_json::to_vec(&diabetes_bundle()).unwrap()).unwrap();

        let artifact = ModelArtifact::load(Disease::Diabetes, &path).unwrap();
        assert_eq!(artifact.metadata().path.as_deref(), Some(path.display().to_string().as_str()));
    }

    #[test]
    fn test_foreign_vector_rejected() {
        let bytes = serde_json::to_vec(&diabetes_bundle()).unwrap();
        let artifact = ModelArtifact::from_json_slice(Disease::Diabetes, &bytes).unwrap();

        let other = FeatureSchema::new(["a", "b", "c", "d", "e", "f", "g", "h"]).unwrap();
        let vector = FeatureVector::zeroed(&other);

        assert!(matches!(artifact.predict_probability(&vector), Err(InferenceError::Backend(_))));
    }
}
