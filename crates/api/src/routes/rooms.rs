//! Room listing routes.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use database::{room, NewRoom, Room};
use tracing::info;

use crate::error::{ApiJson, Result};
use crate::state::AppState;

/// Create a room listing from the submitted fields.
///
/// The server assigns the id and creation time; anything the client sent for
/// those is ignored.
pub async fn create_room(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<NewRoom>,
) -> Result<Json<Room>> {
    let now = Utc::now();
    let listing = fields.into_room(state.room_ids.next_at(now), now);

    room::create_room(state.db.pool(), &listing).await?;

    info!(
        room_id = %listing.id,
        owner_id = listing.owner_id.as_deref().unwrap_or("-"),
        available = ?listing.is_available,
        "Room created"
    );
    Ok(Json(listing))
}
