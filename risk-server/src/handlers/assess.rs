//! Weighted assessment handlers

use axum::{extract::rejection::JsonRejection, Json};
use risk_core::risk::{assess as weighted_assess, overall_risk, WeightedInputs};
use validator::Validate;

use crate::AppResult;
use crate::models::{AssessRequest, AssessResponse, OverallRequest, OverallResponse};

/// Explainable weighted score from four manual indicators
pub async fn assess(
    payload: Result<Json<AssessRequest>, JsonRejection>,
) -> AppResult<Json<AssessResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let verdict = weighted_assess(&WeightedInputs::from(&req));
    tracing::debug!(score = verdict.risk_score, level = %verdict.risk_level, "Weighted assessment");

    Ok(Json(AssessResponse::from(verdict)))
}

/// Mean of whichever per-disease scores the client already has
pub async fn overall(
    payload: Result<Json<OverallRequest>, JsonRejection>,
) -> AppResult<Json<OverallResponse>> {
    let Json(req) = payload?;

    Ok(Json(OverallResponse {
        overall_score: overall_risk(req.scores()),
    }))
}
