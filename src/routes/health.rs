//! Liveness endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    converter_loaded: bool,
}

/// Report liveness and whether the converter singleton has been built.
///
/// Observation only; this never triggers converter construction.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        converter_loaded: state.converter().is_initialized(),
    })
}
