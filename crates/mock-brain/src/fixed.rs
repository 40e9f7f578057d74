//! Fixed brain implementation - answers every question with the same literals.

use brain_core::{async_trait, Brain, BrainError, ChatTurn, MatchScore};
use database::{Preferences, Room, User};
use indexmap::IndexMap;

/// Agreement text returned for every user/room pair.
pub const AGREEMENT: &str = "Roommate Agreement:\n\
1. Noise: Keep noise below 40 dB after 10 PM.\n\
2. Cleanliness: Shared spaces cleaned weekly.\n\
3. Pets: Allowed with prior approval.\n\
4. Rent: $1200 due on 1st of each month.";

/// Mediation advice returned for every chat.
pub const SUGGESTIONS: [&str; 2] = [
    "Schedule a meeting to discuss noise concerns.",
    "Agree on a cleaning schedule.",
];

/// A brain that ignores its inputs and returns fixed answers.
///
/// Useful for exercising the endpoints end to end without a model behind
/// them. Every user gets the same preferences and every room the same score.
#[derive(Debug, Clone, Default)]
pub struct FixedBrain;

impl FixedBrain {
    /// Create a new FixedBrain.
    pub fn new() -> Self {
        Self
    }

    /// The preferences reported for any conversation.
    pub fn preferences() -> Preferences {
        Preferences {
            cleanliness: Some(4),
            social_style: Some(3),
            noise_level: Some(2),
            pets_allowed: Some(true),
            smoking_allowed: Some(false),
            sleep_schedule: Some("Night Owl".to_string()),
            budget: Some("$1000-$1500".to_string()),
            move_in_date: Some("2025-08-01".to_string()),
            deal_breakers: vec!["Smoking".to_string()],
        }
    }

    /// The score reported for any user/room pair.
    pub fn match_score() -> MatchScore {
        let mut breakdown = IndexMap::new();
        breakdown.insert("lifestyle".to_string(), 0.8);
        breakdown.insert("cleanliness".to_string(), 0.9);
        breakdown.insert("budget".to_string(), 0.85);

        MatchScore {
            score: 0.85,
            breakdown,
            reasons: vec!["Similar lifestyle".to_string(), "Budget match".to_string()],
            issues: vec!["Different sleep schedules".to_string()],
        }
    }
}

#[async_trait]
impl Brain for FixedBrain {
    async fn extract_preferences(
        &self,
        _conversation: &serde_json::Value,
    ) -> Result<Preferences, BrainError> {
        Ok(Self::preferences())
    }

    async fn score(&self, _user: Option<&User>, _room: &Room) -> Result<MatchScore, BrainError> {
        Ok(Self::match_score())
    }

    async fn draft_agreement(&self, _user_id: &str, _room_id: &str) -> Result<String, BrainError> {
        Ok(AGREEMENT.to_string())
    }

    async fn mediate(&self, _history: &[ChatTurn]) -> Result<Vec<String>, BrainError> {
        Ok(SUGGESTIONS.iter().map(|s| s.to_string()).collect())
    }

    fn name(&self) -> &str {
        "FixedBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use database::NewRoom;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: None,
            age: None,
            email: None,
            bio: None,
            phone: None,
            occupation: None,
            interests: None,
            preferences: None,
            verification_status: None,
            location: None,
            profile_image_url: None,
        }
    }

    #[tokio::test]
    async fn test_preferences_ignore_conversation() {
        let brain = FixedBrain::new();
        let a = brain.extract_preferences(&serde_json::json!([])).await.unwrap();
        let b = brain
            .extract_preferences(&serde_json::json!([{"role": "user", "content": "I hate cats"}]))
            .await
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(a.cleanliness, Some(4));
        assert_eq!(a.sleep_schedule.as_deref(), Some("Night Owl"));
        assert_eq!(a.deal_breakers, vec!["Smoking"]);
    }

    #[tokio::test]
    async fn test_score() {
        let brain = FixedBrain::new();
        let room = NewRoom::default().into_room("r1".to_string(), Utc::now());

        let score = brain.score(Some(&user()), &room).await.unwrap();
        assert_eq!(score.score, 0.85);
        let categories: Vec<&str> = score.breakdown.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["lifestyle", "cleanliness", "budget"]);
        assert_eq!(score.reasons.len(), 2);
        assert_eq!(score.issues, vec!["Different sleep schedules"]);
    }

    #[tokio::test]
    async fn test_score_without_user() {
        let brain = FixedBrain::new();
        let room = NewRoom::default().into_room("r1".to_string(), Utc::now());

        let score = brain.score(None, &room).await.unwrap();
        assert_eq!(score, FixedBrain::match_score());
    }

    #[tokio::test]
    async fn test_agreement_and_mediation() {
        let brain = FixedBrain::new();
        let agreement = brain.draft_agreement("u1", "r1").await.unwrap();
        assert!(agreement.starts_with("Roommate Agreement:\n1. Noise"));
        assert!(agreement.ends_with("$1200 due on 1st of each month."));

        let suggestions = brain.mediate(&[ChatTurn::new("u1", "hi")]).await.unwrap();
        assert_eq!(suggestions, SUGGESTIONS);
    }

    #[tokio::test]
    async fn test_brain_name() {
        let brain = FixedBrain::new();
        assert_eq!(brain.name(), "FixedBrain");
        assert!(brain.is_ready().await);
    }
}
