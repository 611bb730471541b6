//! Disease identifiers
//!
//! One variant per served risk model. Each maps to an artifact file and an
//! input profile describing how request fields become model columns.

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::profile::{self, InputProfile};

/// Diseases with a trained risk model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    Heart,
    Liver,
    MentalHealth,
}

impl Disease {
    pub const ALL: [Disease; 4] = [
        Disease::Diabetes,
        Disease::Heart,
        Disease::Liver,
        Disease::MentalHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::Heart => "heart",
            Disease::Liver => "liver",
            Disease::MentalHealth => "mental_health",
        }
    }

    /// Capitalised name for user-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Disease::Diabetes => "Diabetes",
            Disease::Heart => "Heart",
            Disease::Liver => "Liver",
            Disease::MentalHealth => "Mental health",
        }
    }

    /// File name of the serialized artifact inside the models directory
    pub fn artifact_file_name(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes_model.json",
            Disease::Heart => "heart_model.json",
            Disease::Liver => "liver_model.json",
            Disease::MentalHealth => "mental_health_model.json",
        }
    }

    /// How request fields are aligned to this model's columns
    pub fn profile(&self) -> &'static InputProfile {
        match self {
            Disease::Diabetes => &profile::DIABETES,
            Disease::Heart => &profile::HEART,
            Disease::Liver => &profile::LIVER,
            Disease::MentalHealth => &profile::MENTAL_HEALTH,
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Path or query value that names no served disease
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown disease: {0}")]
pub struct UnknownDisease(pub String);

impl FromStr for Disease {
    type Err = UnknownDisease;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diabetes" => Ok(Disease::Diabetes),
            "heart" => Ok(Disease::Heart),
            "liver" => Ok(Disease::Liver),
            "mental" | "mental_health" | "mental-health" => Ok(Disease::MentalHealth),
            _ => Err(UnknownDisease(s.to_string())),
        }
    }
}
