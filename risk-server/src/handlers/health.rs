//! Health check handler

use std::collections::BTreeMap;
use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    models: BTreeMap<&'static str, bool>,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let models = state
        .registry
        .status()
        .into_iter()
        .map(|(disease, loaded)| (disease.as_str(), loaded))
        .collect();

    Json(HealthResponse {
        status: "online",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        models,
    })
}
