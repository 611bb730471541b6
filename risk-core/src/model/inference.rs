//! Scaler/Predictor Adapter
//!
//! Thin pass-through: scale the vector, ask the classifier for the class-1
//! probability. Vector length and order are guaranteed by the builder; a
//! mismatch here is a programming error and comes back as an
//! `InferenceError`, never a best-effort guess.

use std::time::Instant;

use crate::error::InferenceError;
use crate::features::FeatureVector;
use super::classifier::ProbabilityClassifier;
use super::scaler::FeatureScaler;

/// Run one vector through a fitted scaler + classifier pair
pub fn predict_probability(
    scaler: &dyn FeatureScaler,
    classifier: &dyn ProbabilityClassifier,
    vector: &FeatureVector,
) -> Result<f64, InferenceError> {
    let start_time = Instant::now();

    let input = vector.to_array();
    let scaled = scaler.transform(input.view())?;
    if let Some(index) = scaled.iter().position(|v| !v.is_finite()) {
        return Err(InferenceError::NonFiniteInput { index });
    }
    let probability = classifier.predict_proba(scaled.view())?;

    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(InferenceError::InvalidProbability(probability));
    }

    log::trace!(
        "{} + {} inference: p={:.4} in {}us",
        scaler.kind(),
        classifier.kind(),
        probability,
        start_time.elapsed().as_micros()
    );

    Ok(probability)
}
