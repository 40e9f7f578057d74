//! The Brain trait definition.

use async_trait::async_trait;
use database::{Preferences, Room, User};

use crate::error::BrainError;
use crate::types::{ChatTurn, MatchScore};

/// The intelligence behind onboarding, matching, agreements and mediation.
///
/// Implementations can range from fixed test doubles to language-model
/// backends. This trait is object-safe and can be used with `Arc<dyn Brain>`.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Derive living preferences from an onboarding conversation.
    ///
    /// The conversation is passed through as the client sent it.
    async fn extract_preferences(
        &self,
        conversation: &serde_json::Value,
    ) -> Result<Preferences, BrainError>;

    /// Assess how well a room suits a user.
    ///
    /// `user` is `None` when the requested user has no stored profile; the
    /// room is still scored.
    async fn score(&self, user: Option<&User>, room: &Room) -> Result<MatchScore, BrainError>;

    /// Draft a roommate agreement for a user moving into a room.
    async fn draft_agreement(&self, user_id: &str, room_id: &str) -> Result<String, BrainError>;

    /// Suggest next steps for a conversation between matched roommates.
    async fn mediate(&self, history: &[ChatTurn]) -> Result<Vec<String>, BrainError>;

    /// Get a human-readable name for this brain implementation.
    fn name(&self) -> &str;

    /// Check if the brain is ready to answer.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
