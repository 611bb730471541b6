//! Risk Module
//!
//! Maps a probability or a weighted composite onto Low/Moderate/High.
//!
//! ## Structure
//! - `types`: `RiskLevel`, `RiskVerdict`, `WeightedInputs`
//! - `rules`: thresholds, weights, factor messages
//! - `classifier`: both scoring strategies, explanation, overall mean

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{
    assess, calculate_weighted_risk, classify_probability, generate_explanation,
    level_for_percentage, level_for_probability, overall_risk, round2,
};
pub use types::{RiskLevel, RiskVerdict, WeightedInputs};
