//! Delayed brain implementation - wraps another brain with artificial delay.

use std::time::Duration;

use brain_core::{async_trait, Brain, BrainError, ChatTurn, MatchScore};
use database::{Preferences, Room, User};
use tokio::time::sleep;

/// A brain that wraps another brain and adds artificial delay.
///
/// Useful for testing timeout handling and simulating model latency.
pub struct DelayedBrain<B: Brain> {
    inner: B,
    delay: Duration,
}

impl<B: Brain> DelayedBrain<B> {
    /// Create a new DelayedBrain wrapping the given brain with the specified delay.
    pub fn new(inner: B, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a brain with a delay in milliseconds.
    pub fn with_millis(inner: B, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Create a brain with a delay in seconds.
    pub fn with_secs(inner: B, secs: u64) -> Self {
        Self::new(inner, Duration::from_secs(secs))
    }
}

#[async_trait]
impl<B: Brain> Brain for DelayedBrain<B> {
    async fn extract_preferences(
        &self,
        conversation: &serde_json::Value,
    ) -> Result<Preferences, BrainError> {
        sleep(self.delay).await;
        self.inner.extract_preferences(conversation).await
    }

    async fn score(&self, user: Option<&User>, room: &Room) -> Result<MatchScore, BrainError> {
        sleep(self.delay).await;
        self.inner.score(user, room).await
    }

    async fn draft_agreement(&self, user_id: &str, room_id: &str) -> Result<String, BrainError> {
        sleep(self.delay).await;
        self.inner.draft_agreement(user_id, room_id).await
    }

    async fn mediate(&self, history: &[ChatTurn]) -> Result<Vec<String>, BrainError> {
        sleep(self.delay).await;
        self.inner.mediate(history).await
    }

    fn name(&self) -> &str {
        "DelayedBrain"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}
