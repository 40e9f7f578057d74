//! Match storage.
//!
//! A match id is derived from its user and room, so writing the same pair
//! twice overwrites the earlier record instead of duplicating it.

use sqlx::types::Json;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::Match;

async fn upsert_with<'e, E>(executor: E, record: &Match) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO matches (
            id, user_id, room_id, compatibility_score, score_breakdown,
            match_reasons, potential_issues, matched_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            user_id = excluded.user_id,
            room_id = excluded.room_id,
            compatibility_score = excluded.compatibility_score,
            score_breakdown = excluded.score_breakdown,
            match_reasons = excluded.match_reasons,
            potential_issues = excluded.potential_issues,
            matched_at = excluded.matched_at
        "#,
    )
    .bind(&record.id)
    .bind(&record.user_id)
    .bind(&record.room_id)
    .bind(record.compatibility_score)
    .bind(Json(&record.score_breakdown))
    .bind(Json(&record.match_reasons))
    .bind(Json(&record.potential_issues))
    .bind(record.matched_at)
    .execute(executor)
    .await?;

    Ok(())
}

/// Create or overwrite a single match.
pub async fn upsert_match(pool: &SqlitePool, record: &Match) -> Result<()> {
    upsert_with(pool, record).await
}

/// Create or overwrite a batch of matches in one transaction.
///
/// Either every record is written or none is.
pub async fn upsert_matches(pool: &SqlitePool, records: &[Match]) -> Result<()> {
    let mut tx = pool.begin().await?;

    for record in records {
        upsert_with(&mut *tx, record).await?;
    }

    tx.commit().await?;

    tracing::debug!(count = records.len(), "Stored match batch");
    Ok(())
}

/// Get a match by ID.
pub async fn get_match(pool: &SqlitePool, id: &str) -> Result<Match> {
    sqlx::query_as::<_, Match>(
        r#"
        SELECT id, user_id, room_id, compatibility_score, score_breakdown,
               match_reasons, potential_issues, matched_at
        FROM matches
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Match",
        id: id.to_string(),
    })
}

/// List all matches for a user, oldest first.
pub async fn list_matches_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Match>> {
    let matches = sqlx::query_as::<_, Match>(
        r#"
        SELECT id, user_id, room_id, compatibility_score, score_breakdown,
               match_reasons, potential_issues, matched_at
        FROM matches
        WHERE user_id = ?
        ORDER BY rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

/// Count total matches.
pub async fn count_matches(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM matches
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use chrono::Utc;
    use indexmap::IndexMap;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn record(user_id: &str, room_id: &str, score: f64) -> Match {
        let mut breakdown = IndexMap::new();
        breakdown.insert("lifestyle".to_string(), 0.7);
        breakdown.insert("budget".to_string(), 0.9);

        Match {
            id: Match::id_for(user_id, room_id),
            user_id: user_id.to_string(),
            room_id: room_id.to_string(),
            compatibility_score: score,
            score_breakdown: breakdown,
            match_reasons: vec!["Budget match".to_string()],
            potential_issues: vec![],
            matched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_and_get_match() {
        let db = test_db().await;
        upsert_match(db.pool(), &record("u1", "r1", 0.5)).await.unwrap();

        let fetched = get_match(db.pool(), "u1-r1").await.unwrap();
        assert_eq!(fetched.user_id, "u1");
        assert_eq!(fetched.room_id, "r1");
        assert_eq!(fetched.compatibility_score, 0.5);
        let categories: Vec<&str> = fetched.score_breakdown.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["lifestyle", "budget"]);
        assert_eq!(fetched.match_reasons, vec!["Budget match"]);
    }

    #[tokio::test]
    async fn test_rematch_overwrites() {
        let db = test_db().await;
        upsert_match(db.pool(), &record("u1", "r1", 0.5)).await.unwrap();
        upsert_match(db.pool(), &record("u1", "r1", 0.9)).await.unwrap();

        assert_eq!(count_matches(db.pool()).await.unwrap(), 1);
        let fetched = get_match(db.pool(), "u1-r1").await.unwrap();
        assert_eq!(fetched.compatibility_score, 0.9);
    }

    #[tokio::test]
    async fn test_upsert_batch() {
        let db = test_db().await;
        let batch = vec![record("u1", "r1", 0.5), record("u1", "r2", 0.6)];
        upsert_matches(db.pool(), &batch).await.unwrap();
        upsert_matches(db.pool(), &batch).await.unwrap();

        let ids: Vec<String> = list_matches_for_user(db.pool(), "u1")
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["u1-r1", "u1-r2"]);
        assert!(list_matches_for_user(db.pool(), "u2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_batch_writes_nothing() {
        let db = test_db().await;
        // SQLite stores NaN as NULL, which violates NOT NULL on the score.
        let batch = vec![record("u1", "r1", 0.5), record("u1", "r2", f64::NAN)];

        assert!(upsert_matches(db.pool(), &batch).await.is_err());
        assert_eq!(count_matches(db.pool()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_match() {
        let db = test_db().await;
        let result = get_match(db.pool(), "u1-r9").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { entity: "Match", .. })));
    }
}
