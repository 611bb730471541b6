//! Weighted assessment and overall-risk payloads

use risk_core::risk::WeightedInputs;
use risk_core::{RiskLevel, RiskVerdict};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const WEIGHTED_MODEL_SOURCE: &str = "Weighted clinical indicators";

/// Manually scored inputs, each 0-10 except the family flag
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssessRequest {
    #[validate(range(min = 0.0, max = 10.0))]
    pub lab: f64,

    #[validate(range(min = 0.0, max = 10.0))]
    pub lifestyle: f64,

    #[validate(range(min = 0.0, max = 10.0))]
    pub stress: f64,

    #[validate(range(max = 1))]
    pub family: u8,
}

impl From<&AssessRequest> for WeightedInputs {
    fn from(req: &AssessRequest) -> Self {
        WeightedInputs {
            lab: req.lab,
            lifestyle: req.lifestyle,
            stress: req.stress,
            family: req.family,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessResponse {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub explanation: Vec<String>,
    pub model_source: String,
}

impl From<RiskVerdict> for AssessResponse {
    fn from(verdict: RiskVerdict) -> Self {
        Self {
            risk_score: verdict.risk_score,
            risk_level: verdict.risk_level,
            explanation: verdict.explanation.unwrap_or_default(),
            model_source: WEIGHTED_MODEL_SOURCE.to_string(),
        }
    }
}

/// Per-disease scores already produced by the client; any may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverallRequest {
    #[serde(default)]
    pub diabetes: Option<f64>,
    #[serde(default)]
    pub heart: Option<f64>,
    #[serde(default)]
    pub liver: Option<f64>,
    #[serde(default)]
    pub mental: Option<f64>,
}

impl OverallRequest {
    pub fn scores(&self) -> [Option<f64>; 4] {
        [self.diabetes, self.heart, self.liver, self.mental]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallResponse {
    pub overall_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(lab: f64, lifestyle: f64, stress: f64, family: u8) -> AssessRequest {
        AssessRequest { lab, lifestyle, stress, family }
    }

    #[test]
    fn test_valid_request() {
        assert!(request(0.0, 10.0, 5.5, 1).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let errors = request(11.0, 5.0, 5.0, 0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("lab"));

        let errors = request(5.0, 5.0, -1.0, 0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("stress"));

        let errors = request(5.0, 5.0, 5.0, 2).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("family"));
    }

    #[test]
    fn test_overall_request_missing_fields() {
        let req: OverallRequest = serde_json::from_str(r#"{"diabetes": 40.0, "heart": null}"#).unwrap();
        assert_eq!(req.scores(), [Some(40.0), None, None, None]);
    }
}
