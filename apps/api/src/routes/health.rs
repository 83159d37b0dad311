use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> &'static str {
    "Screening API is running"
}

/// GET /health
/// Reports provider configuration without exposing the key itself.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "screening-api",
        "providerConfigured": config.provider_configured(),
        "model": config.gemini_model,
        "apiVersion": config.gemini_api_version,
        "scoringPolicy": config.scoring_policy,
    }))
}
