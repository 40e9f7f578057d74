//! Database models.
//!
//! Wire names are camelCase; columns keep the Rust field names. Nested
//! documents are stored as JSON text and decoded through `#[sqlx(json)]`.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Verification state of a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

/// Living preferences extracted from an onboarding conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// 1 (relaxed) to 5 (spotless).
    pub cleanliness: Option<i64>,
    pub social_style: Option<i64>,
    pub noise_level: Option<i64>,
    pub pets_allowed: Option<bool>,
    pub smoking_allowed: Option<bool>,
    /// e.g. "Night Owl", "Early Bird"
    pub sleep_schedule: Option<String>,
    /// Free-form range, e.g. "$1000-$1500".
    pub budget: Option<String>,
    /// Date string, e.g. "2025-08-01".
    pub move_in_date: Option<String>,
    #[serde(default)]
    pub deal_breakers: Vec<String>,
}

/// A user looking for a room, identified by a client-chosen id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub interests: Option<String>,
    /// Stored as JSON; `null` until onboarding has run.
    #[sqlx(json)]
    pub preferences: Option<Preferences>,
    pub verification_status: Option<VerificationStatus>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Room measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A room listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub rent: Option<f64>,
    pub location: Option<String>,
    #[sqlx(json)]
    pub dimensions: Option<Dimensions>,
    #[sqlx(json)]
    pub amenities: Vec<String>,
    /// Image URLs.
    #[sqlx(json)]
    pub images: Vec<String>,
    /// Sensor reading, decibels.
    pub noise_level: Option<f64>,
    /// Sensor reading, lux.
    pub light_level: Option<f64>,
    /// Weak reference to the owning [`User`].
    pub owner_id: Option<String>,
    pub is_available: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied room fields. Anything not listed here is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rent: Option<f64>,
    pub location: Option<String>,
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub noise_level: Option<f64>,
    pub light_level: Option<f64>,
    pub owner_id: Option<String>,
    pub is_available: Option<bool>,
}

impl NewRoom {
    /// Attach a server-assigned id and creation time.
    pub fn into_room(self, id: String, created_at: DateTime<Utc>) -> Room {
        Room {
            id,
            title: self.title,
            description: self.description,
            rent: self.rent,
            location: self.location,
            dimensions: self.dimensions,
            amenities: self.amenities,
            images: self.images,
            noise_level: self.noise_level,
            light_level: self.light_level,
            owner_id: self.owner_id,
            is_available: self.is_available,
            created_at,
        }
    }
}

/// A computed user/room pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Always `{user_id}-{room_id}`, see [`Match::id_for`].
    pub id: String,
    pub user_id: String,
    pub room_id: String,
    /// 0.0 to 1.0.
    pub compatibility_score: f64,
    /// Category name to score, in the order the scorer produced them.
    #[sqlx(json)]
    pub score_breakdown: IndexMap<String, f64>,
    #[sqlx(json)]
    pub match_reasons: Vec<String>,
    #[sqlx(json)]
    pub potential_issues: Vec<String>,
    pub matched_at: DateTime<Utc>,
}

impl Match {
    /// Build the id of the match between a user and a room.
    pub fn id_for(user_id: &str, room_id: &str) -> String {
        format!("{}-{}", user_id, room_id)
    }
}

/// A single timestamped chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A chat transcript recorded by one mediation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    /// Weak reference to the [`Match`] being mediated.
    pub match_id: String,
    #[sqlx(json)]
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}
