//! Risk Thresholds, Weights & Messages
//!
//! Constants only. The two threshold schemes are deliberately separate:
//! the probability path uses strict bounds on p, the weighted path uses
//! inclusive bounds on a 0-100 percentage.

// ============================================================================
// PROBABILITY PATH (trained models)
// ============================================================================

/// p above this = High
pub const PROBABILITY_HIGH: f64 = 0.6;

/// p above this (and not High) = Moderate
pub const PROBABILITY_MODERATE: f64 = 0.3;

// ============================================================================
// WEIGHTED PATH (explainable scorer)
// ============================================================================

pub const LAB_WEIGHT: f64 = 0.35;
pub const LIFESTYLE_WEIGHT: f64 = 0.30;
pub const STRESS_WEIGHT: f64 = 0.20;
pub const FAMILY_WEIGHT: f64 = 0.15;

/// Family history counts as a full 10-point score
pub const FAMILY_HISTORY_POINTS: f64 = 10.0;

/// Percentage at or above this = High
pub const WEIGHTED_HIGH_MIN: f64 = 65.0;

/// Percentage at or above this (and not High) = Moderate
pub const WEIGHTED_MODERATE_MIN: f64 = 35.0;

// ============================================================================
// EXPLANATION RULES
// ============================================================================

/// Component score at or above this is reported as a factor
pub const FACTOR_TRIGGER: f64 = 6.0;

pub const LAB_FACTOR: &str = "Lab values show concerning upward trends";
pub const LIFESTYLE_FACTOR: &str = "Lifestyle patterns indicate increased health risk";
pub const STRESS_FACTOR: &str = "Sustained stress levels may impact overall health";
pub const FAMILY_FACTOR: &str = "Family history increases inherited risk";
pub const NO_FACTORS: &str = "No major risk factors detected at this time";
