//! Onboarding: turn a conversation into stored preferences.

use axum::extract::State;
use axum::Json;
use database::{user, User, VerificationStatus};
use serde::Deserialize;
use tracing::info;

use crate::error::{ApiJson, Result};
use crate::state::AppState;

/// Request body for POST /api/onboarding.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub user_id: String,
    /// Transcript in whatever shape the client keeps it.
    #[serde(default)]
    pub conversation: serde_json::Value,
}

/// Extract preferences and mark the user as pending verification.
///
/// Creates the user if the id is new.
pub async fn onboard(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OnboardingRequest>,
) -> Result<Json<User>> {
    let preferences = state.brain.extract_preferences(&req.conversation).await?;

    let user = user::upsert_preferences(
        state.db.pool(),
        &req.user_id,
        &preferences,
        VerificationStatus::Pending,
    )
    .await?;

    info!(user_id = %user.id, "User onboarded");
    Ok(Json(user))
}
