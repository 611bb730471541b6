//! Risk Types
//!
//! Data structures only; scoring lives in `classifier`.

use serde::{Deserialize, Serialize};

/// Three-tier risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discretised, user-facing outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskVerdict {
    /// 0-100, rounded to 2 decimals
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Contributing factors, only produced by the weighted scorer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Vec<String>>,
}

/// The four manually scored inputs of the explainable model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedInputs {
    /// Lab trend score, 0-10
    pub lab: f64,
    /// Lifestyle score, 0-10
    pub lifestyle: f64,
    /// Stress / mental health indicator, 0-10
    pub stress: f64,
    /// Family history of chronic disease, 0 or 1
    pub family: u8,
}
