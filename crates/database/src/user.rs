//! User operations.

use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Preferences, User, VerificationStatus};

const USER_COLUMNS: &str = r#"
    id, name, age, email, bio, phone, occupation, interests,
    preferences, verification_status, location, profile_image_url
"#;

/// Create a new user.
pub async fn create_user(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (
            id, name, age, email, bio, phone, occupation, interests,
            preferences, verification_status, location, profile_image_url
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.age)
    .bind(&user.email)
    .bind(&user.bio)
    .bind(&user.phone)
    .bind(&user.occupation)
    .bind(&user.interests)
    .bind(Json(&user.preferences))
    .bind(user.verification_status)
    .bind(&user.location)
    .bind(&user.profile_image_url)
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::on_insert(e, "User", &user.id))?;

    Ok(())
}

/// Get a user by ID.
pub async fn get_user(pool: &SqlitePool, id: &str) -> Result<User> {
    find_user(pool, id)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "User",
            id: id.to_string(),
        })
}

/// Get a user by ID, returning `None` if absent.
pub async fn find_user(pool: &SqlitePool, id: &str) -> Result<Option<User>> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
    let user = sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Set a user's preferences and verification status.
///
/// Creates a bare user with only these fields if the id is unknown; other
/// profile fields of an existing user are left untouched. Returns the stored
/// user after the write.
pub async fn upsert_preferences(
    pool: &SqlitePool,
    id: &str,
    preferences: &Preferences,
    status: VerificationStatus,
) -> Result<User> {
    sqlx::query(
        r#"
        INSERT INTO users (id, preferences, verification_status)
        VALUES (?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            preferences = excluded.preferences,
            verification_status = excluded.verification_status
        "#,
    )
    .bind(id)
    .bind(Json(Some(preferences)))
    .bind(status)
    .execute(pool)
    .await?;

    tracing::debug!(user_id = %id, ?status, "Upserted user preferences");

    get_user(pool, id).await
}

/// Count total users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
