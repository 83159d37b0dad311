use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::{debug, warn};

use crate::screening::{analyze_screening, ScreeningInput, ScreeningResult};
use crate::state::AppState;

/// POST /analyze
///
/// A missing body or anything other than a JSON object gets a 400 with the
/// `Unavailable` result; the scorer only runs on an object.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ScreeningResult>) {
    if body.iter().all(u8::is_ascii_whitespace) {
        return (StatusCode::BAD_REQUEST, Json(ScreeningResult::unavailable()));
    }

    let value: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("Rejected screening body: {e}");
            return (StatusCode::BAD_REQUEST, Json(ScreeningResult::error()));
        }
    };

    let Value::Object(answers) = value else {
        return (StatusCode::BAD_REQUEST, Json(ScreeningResult::unavailable()));
    };

    let input = ScreeningInput::from_json_object(&answers);
    let result = analyze_screening(&input, state.config.scoring_policy);
    debug!(
        "Screening scored: score={}, risk={}, observations={}",
        result.score,
        result.risk_level,
        result.observations.len()
    );

    (StatusCode::OK, Json(result))
}
