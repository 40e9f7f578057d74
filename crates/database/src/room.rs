//! Room listing operations.

use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Room;

const ROOM_COLUMNS: &str = r#"
    id, title, description, rent, location, dimensions, amenities, images,
    noise_level, light_level, owner_id, is_available, created_at
"#;

/// Insert a new room.
pub async fn create_room(pool: &SqlitePool, room: &Room) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO rooms (
            id, title, description, rent, location, dimensions, amenities, images,
            noise_level, light_level, owner_id, is_available, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&room.id)
    .bind(&room.title)
    .bind(&room.description)
    .bind(room.rent)
    .bind(&room.location)
    .bind(Json(&room.dimensions))
    .bind(Json(&room.amenities))
    .bind(Json(&room.images))
    .bind(room.noise_level)
    .bind(room.light_level)
    .bind(&room.owner_id)
    .bind(room.is_available)
    .bind(room.created_at)
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::on_insert(e, "Room", &room.id))?;

    Ok(())
}

/// Get a room by ID.
pub async fn get_room(pool: &SqlitePool, id: &str) -> Result<Room> {
    let query = format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = ?");
    sqlx::query_as::<_, Room>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "Room",
            id: id.to_string(),
        })
}

/// List rooms currently marked available, in insertion order.
pub async fn list_available_rooms(pool: &SqlitePool) -> Result<Vec<Room>> {
    let query = format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE is_available = 1 ORDER BY rowid");
    let rooms = sqlx::query_as::<_, Room>(&query).fetch_all(pool).await?;

    Ok(rooms)
}

/// Highest numeric room id stored, or 0 when there are none.
///
/// Used to seed the id generator at startup.
pub async fn max_room_id(pool: &SqlitePool) -> Result<u64> {
    let max = sqlx::query_scalar::<_, Option<i64>>(
        r#"
        SELECT MAX(CAST(id AS INTEGER)) FROM rooms
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(max.and_then(|id| u64::try_from(id).ok()).unwrap_or(0))
}

/// Count total rooms.
pub async fn count_rooms(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM rooms
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
