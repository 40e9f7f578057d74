//! Roommate agreement drafting.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiJson, Result};
use crate::state::AppState;

/// Request body for POST /api/agreements.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementRequest {
    pub user_id: String,
    pub room_id: String,
}

#[derive(Debug, Serialize)]
pub struct AgreementResponse {
    pub agreement: String,
}

/// Draft an agreement for a user and a room.
///
/// Nothing is looked up or stored; the ids are handed to the brain as-is.
pub async fn draft_agreement(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AgreementRequest>,
) -> Result<Json<AgreementResponse>> {
    let agreement = state.brain.draft_agreement(&req.user_id, &req.room_id).await?;

    info!(user_id = %req.user_id, room_id = %req.room_id, "Agreement drafted");
    Ok(Json(AgreementResponse { agreement }))
}
