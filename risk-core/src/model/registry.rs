//! Model Registry - the process-wide, read-only inference context
//!
//! Built once at startup (or per test), then shared by reference across
//! every request. Nothing mutates it after construction, so concurrent
//! readers need no locking.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use serde::Serialize;

use crate::disease::Disease;
use crate::error::{ArtifactError, RiskError, RiskResult};
use crate::features::RawInputRecord;
use crate::risk::{classify_probability, RiskVerdict};
use super::artifact::ModelArtifact;

/// Outcome of one trained-model inference
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub disease: Disease,
    pub probability: f64,
    pub verdict: RiskVerdict,
    pub model_source: String,
}

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<Disease, Arc<ModelArtifact>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the artifact for its disease
    pub fn with_artifact(mut self, artifact: ModelArtifact) -> Self {
        self.models.insert(artifact.disease(), Arc::new(artifact));
        self
    }

    /// Load every known disease's artifact from `dir`.
    ///
    /// Never fails: a missing or invalid artifact leaves that disease
    /// unavailable and is logged.
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut registry = Self::new();

        if !dir.is_dir() {
            log::warn!("Models directory not found: {}", dir.display());
            return registry;
        }

        for disease in Disease::ALL {
            let path = dir.join(disease.artifact_file_name());
            match ModelArtifact::load(disease, &path) {
                Ok(artifact) => {
                    registry = registry.with_artifact(artifact);
                }
                Err(ArtifactError::NotFound(path)) => {
                    log::warn!("{} model not found at {}", disease.display_name(), path.display());
                }
                Err(e) => {
                    log::warn!("Failed to load {} model: {}", disease, e);
                }
            }
        }

        log::info!(
            "Model registry ready: {}/{} models loaded",
            registry.loaded_count(),
            Disease::ALL.len()
        );

        registry
    }

    pub fn get(&self, disease: Disease) -> RiskResult<&Arc<ModelArtifact>> {
        self.models
            .get(&disease)
            .ok_or(RiskError::ModelUnavailable(disease))
    }

    pub fn is_loaded(&self, disease: Disease) -> bool {
        self.models.contains_key(&disease)
    }

    pub fn loaded_count(&self) -> usize {
        self.models.len()
    }

    /// Availability of every known disease
    pub fn status(&self) -> BTreeMap<Disease, bool> {
        Disease::ALL
            .iter()
            .map(|d| (*d, self.is_loaded(*d)))
            .collect()
    }

    /// Full trained-model path: build vector, scale, classify, threshold
    pub fn predict(&self, disease: Disease, record: &RawInputRecord) -> RiskResult<Prediction> {
        let artifact = self.get(disease)?;

        let vector = artifact.build_vector(record);
        log::debug!(
            "{} input: {} field(s) -> {}",
            disease,
            record.len(),
            vector.to_log_entry(artifact.schema())
        );

        let probability = artifact.predict_probability(&vector).map_err(|source| {
            log::error!("{} inference failed: {}", disease, source);
            RiskError::InferenceFailure { disease, source }
        })?;

        Ok(Prediction {
            disease,
            probability,
            verdict: classify_probability(probability),
            model_source: artifact.model_source().to_string(),
        })
    }
}
