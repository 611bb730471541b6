//! Risk Classifier
//!
//! Input: a model probability, or four manual scores.
//! Output: `RiskVerdict`.

use super::rules::*;
use super::types::{RiskLevel, RiskVerdict, WeightedInputs};

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// PROBABILITY-THRESHOLD CLASSIFIER
// ============================================================================

/// Strict bounds: p == 0.6 is Moderate, p == 0.3 is Low
pub fn level_for_probability(p: f64) -> RiskLevel {
    if p > PROBABILITY_HIGH {
        RiskLevel::High
    } else if p > PROBABILITY_MODERATE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Verdict for a trained-model probability in [0, 1]
pub fn classify_probability(p: f64) -> RiskVerdict {
    RiskVerdict {
        risk_score: round2(p * 100.0),
        risk_level: level_for_probability(p),
        explanation: None,
    }
}

// ============================================================================
// WEIGHTED EXPLAINABLE SCORER
// ============================================================================

/// Inclusive bounds on the 0-100 percentage
pub fn level_for_percentage(percentage: f64) -> RiskLevel {
    if percentage >= WEIGHTED_HIGH_MIN {
        RiskLevel::High
    } else if percentage >= WEIGHTED_MODERATE_MIN {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// Weighted percentage and its level.
///
/// The level is taken from the rounded percentage so the reported score and
/// label never disagree at a boundary.
pub fn calculate_weighted_risk(inputs: &WeightedInputs) -> (f64, RiskLevel) {
    let raw = LAB_WEIGHT * inputs.lab
        + LIFESTYLE_WEIGHT * inputs.lifestyle
        + STRESS_WEIGHT * inputs.stress
        + FAMILY_WEIGHT * (f64::from(inputs.family) * FAMILY_HISTORY_POINTS);

    let percentage = round2(((raw / 10.0) * 100.0).clamp(0.0, 100.0));
    (percentage, level_for_percentage(percentage))
}

/// Factor statements in fixed order: lab, lifestyle, stress, family.
/// Falls back to a single "no major factors" line.
pub fn generate_explanation(inputs: &WeightedInputs) -> Vec<String> {
    let mut reasons = Vec::new();

    if inputs.lab >= FACTOR_TRIGGER {
        reasons.push(LAB_FACTOR.to_string());
    }
    if inputs.lifestyle >= FACTOR_TRIGGER {
        reasons.push(LIFESTYLE_FACTOR.to_string());
    }
    if inputs.stress >= FACTOR_TRIGGER {
        reasons.push(STRESS_FACTOR.to_string());
    }
    if inputs.family == 1 {
        reasons.push(FAMILY_FACTOR.to_string());
    }

    if reasons.is_empty() {
        reasons.push(NO_FACTORS.to_string());
    }

    reasons
}

/// Weighted verdict with explanation
pub fn assess(inputs: &WeightedInputs) -> RiskVerdict {
    let (risk_score, risk_level) = calculate_weighted_risk(inputs);
    RiskVerdict {
        risk_score,
        risk_level,
        explanation: Some(generate_explanation(inputs)),
    }
}

// ============================================================================
// OVERALL
// ============================================================================

/// Mean of the scores that were produced, rounded to 2 decimals.
///
/// Missing scores are skipped rather than counted as zero.
pub fn overall_risk<I>(scores: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let present: Vec<f64> = scores
        .into_iter()
        .flatten()
        .filter(|s| s.is_finite())
        .collect();
    if present.is_empty() {
        return None;
    }
    Some(round2(present.iter().sum::<f64>() / present.len() as f64))
}
