//! Matching: score a user against every available room.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use database::{matches, room, user, Match, Room, User};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ApiJson, Result};
use crate::state::AppState;

/// Request body for POST /api/matches.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub user_id: String,
}

/// A stored match together with the user and room it pairs.
#[derive(Debug, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub record: Match,
    /// `null` when the user has never onboarded.
    pub user: Option<User>,
    pub room: Room,
}

/// Match a user against all available rooms.
///
/// One match is produced per available room, in listing order. The whole
/// batch is stored atomically; a rerun overwrites the previous matches.
/// An unknown user is still matched, with `user` reported as `null`.
pub async fn create_matches(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<MatchRequest>,
) -> Result<Json<Vec<MatchResult>>> {
    let pool = state.db.pool();

    let user = user::find_user(pool, &req.user_id).await?;
    if user.is_none() {
        warn!(user_id = %req.user_id, "Matching a user with no stored profile");
    }
    let rooms = room::list_available_rooms(pool).await?;

    let mut records = Vec::with_capacity(rooms.len());
    for listing in &rooms {
        let score = state.brain.score(user.as_ref(), listing).await?;
        records.push(score.into_match(&req.user_id, &listing.id, Utc::now()));
    }

    matches::upsert_matches(pool, &records).await?;

    info!(user_id = %req.user_id, count = records.len(), "Matches computed");

    let results = records
        .into_iter()
        .zip(rooms)
        .map(|(record, room)| MatchResult {
            record,
            user: user.clone(),
            room,
        })
        .collect();

    Ok(Json(results))
}
