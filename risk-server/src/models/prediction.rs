//! Trained-model prediction payloads

use risk_core::{Prediction, RiskLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub model_source: String,
}

impl From<Prediction> for PredictionResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            risk_score: prediction.verdict.risk_score,
            risk_level: prediction.verdict.risk_level,
            model_source: prediction.model_source,
        }
    }
}
