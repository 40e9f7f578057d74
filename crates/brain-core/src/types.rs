//! Request and result types exchanged with a brain.

use chrono::{DateTime, Utc};
use database::{ChatMessage, Match};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One line of a chat between matched roommates, as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub sender_id: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(sender_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            content: content.into(),
        }
    }

    /// Stamp the turn with a server-side timestamp for storage.
    pub fn stamped(self, timestamp: DateTime<Utc>) -> ChatMessage {
        ChatMessage {
            sender_id: self.sender_id,
            content: self.content,
            timestamp,
        }
    }
}

/// Compatibility assessment of a user for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    /// Overall score between 0.0 and 1.0.
    pub score: f64,
    /// Per-category scores.
    pub breakdown: IndexMap<String, f64>,
    pub reasons: Vec<String>,
    pub issues: Vec<String>,
}

impl MatchScore {
    /// Turn the assessment into a storable match record.
    pub fn into_match(self, user_id: &str, room_id: &str, matched_at: DateTime<Utc>) -> Match {
        Match {
            id: Match::id_for(user_id, room_id),
            user_id: user_id.to_string(),
            room_id: room_id.to_string(),
            compatibility_score: self.score,
            score_breakdown: self.breakdown,
            match_reasons: self.reasons,
            potential_issues: self.issues,
            matched_at,
        }
    }
}
