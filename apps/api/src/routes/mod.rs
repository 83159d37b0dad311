pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::errors::AppError;
use crate::screening::handlers::handle_analyze;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handle_analyze))
        .route("/chat", post(handle_chat))
        .fallback(not_found)
        .with_state(state)
}
