//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub brain: String,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let status = if state.brain.is_ready().await {
        "ok"
    } else {
        "degraded"
    };

    Json(Health {
        status: status.to_string(),
        brain: state.brain.name().to_string(),
    })
}
