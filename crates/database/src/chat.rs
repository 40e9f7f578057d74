//! Chat transcript storage.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Chat, ChatMessage};

/// Insert a new chat transcript for a match.
///
/// Every call creates a fresh document, even for a match that already has one.
pub async fn create_chat(
    pool: &SqlitePool,
    match_id: &str,
    messages: Vec<ChatMessage>,
    created_at: DateTime<Utc>,
) -> Result<Chat> {
    let chat = Chat {
        id: Uuid::new_v4().to_string(),
        match_id: match_id.to_string(),
        messages,
        created_at,
    };

    sqlx::query(
        r#"
        INSERT INTO chats (id, match_id, messages, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&chat.id)
    .bind(&chat.match_id)
    .bind(Json(&chat.messages))
    .bind(chat.created_at)
    .execute(pool)
    .await?;

    Ok(chat)
}

/// List chats recorded for a match, oldest first.
pub async fn list_chats_for_match(pool: &SqlitePool, match_id: &str) -> Result<Vec<Chat>> {
    let chats = sqlx::query_as::<_, Chat>(
        r#"
        SELECT id, match_id, messages, created_at
        FROM chats
        WHERE match_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await?;

    Ok(chats)
}
