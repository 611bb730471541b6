//! Trained-model prediction handler

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use risk_core::{Disease, RawInputRecord, RiskError};
use serde_json::Value;

use crate::{AppError, AppResult, AppState};
use crate::models::PredictionResponse;

/// Score one record against the stored model for `disease`
pub async fn predict(
    State(state): State<AppState>,
    Path(disease): Path<String>,
    body: Bytes,
) -> AppResult<Json<PredictionResponse>> {
    let disease: Disease = disease
        .parse()
        .map_err(|e: risk_core::disease::UnknownDisease| AppError::NotFound(e.to_string()))?;

    if !state.registry.is_loaded(disease) {
        return Err(RiskError::ModelUnavailable(disease).into());
    }

    let record = parse_record(&body)?;
    let prediction = state.registry.predict(disease, &record)?;

    tracing::info!(
        disease = %disease,
        probability = prediction.probability,
        level = %prediction.verdict.risk_level,
        "Prediction served"
    );

    Ok(Json(PredictionResponse::from(prediction)))
}

/// An empty body is an empty record; anything else must be a JSON object.
fn parse_record(body: &[u8]) -> Result<RawInputRecord, RiskError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawInputRecord::new());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| RiskError::MalformedInput(format!("invalid JSON body: {}", e)))?;

    RawInputRecord::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_empty_body() {
        assert!(parse_record(b"").unwrap().is_empty());
        assert!(parse_record(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_record_rejects_garbage() {
        assert!(matches!(parse_record(b"{oops"), Err(RiskError::MalformedInput(_))));
        assert!(matches!(parse_record(b"42"), Err(RiskError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_record_object() {
        let record = parse_record(br#"{"age": "63", "cp": 2}"#).unwrap();
        assert_eq!(record.number("age"), Some(63.0));
        assert_eq!(record.category("cp").as_deref(), Some("2"));
    }
}
