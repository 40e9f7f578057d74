//! Deadline enforcement for brain calls.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use database::{Preferences, Room, User};

use crate::error::BrainError;
use crate::trait_def::Brain;
use crate::types::{ChatTurn, MatchScore};

/// Wraps a brain so that every call fails with [`BrainError::Timeout`] once
/// `limit` has elapsed.
pub struct TimeoutBrain<B: Brain> {
    inner: B,
    limit: Duration,
}

impl<B: Brain> TimeoutBrain<B> {
    pub fn new(inner: B, limit: Duration) -> Self {
        Self { inner, limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, BrainError>>,
    ) -> Result<T, BrainError> {
        tokio::time::timeout(self.limit, call)
            .await
            .map_err(|_| BrainError::Timeout(self.limit))?
    }
}

#[async_trait]
impl<B: Brain> Brain for TimeoutBrain<B> {
    async fn extract_preferences(
        &self,
        conversation: &serde_json::Value,
    ) -> Result<Preferences, BrainError> {
        self.bounded(self.inner.extract_preferences(conversation)).await
    }

    async fn score(&self, user: Option<&User>, room: &Room) -> Result<MatchScore, BrainError> {
        self.bounded(self.inner.score(user, room)).await
    }

    async fn draft_agreement(&self, user_id: &str, room_id: &str) -> Result<String, BrainError> {
        self.bounded(self.inner.draft_agreement(user_id, room_id)).await
    }

    async fn mediate(&self, history: &[ChatTurn]) -> Result<Vec<String>, BrainError> {
        self.bounded(self.inner.mediate(history)).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers agreements after `delay`, everything else fails.
    struct SlowBrain {
        delay: Duration,
    }

    #[async_trait]
    impl Brain for SlowBrain {
        async fn extract_preferences(&self, _: &serde_json::Value) -> Result<Preferences, BrainError> {
            Err(BrainError::Unavailable("offline".to_string()))
        }

        async fn score(&self, _: Option<&User>, _: &Room) -> Result<MatchScore, BrainError> {
            Err(BrainError::Unavailable("offline".to_string()))
        }

        async fn draft_agreement(&self, user_id: &str, room_id: &str) -> Result<String, BrainError> {
            tokio::time::sleep(self.delay).await;
            Ok(format!("{user_id} moves into {room_id}"))
        }

        async fn mediate(&self, _: &[ChatTurn]) -> Result<Vec<String>, BrainError> {
            Err(BrainError::Unavailable("offline".to_string()))
        }

        fn name(&self) -> &str {
            "SlowBrain"
        }
    }

    #[tokio::test]
    async fn test_within_limit() {
        let brain = TimeoutBrain::new(SlowBrain { delay: Duration::from_millis(5) }, Duration::from_secs(5));
        let text = brain.draft_agreement("u1", "r1").await.unwrap();
        assert_eq!(text, "u1 moves into r1");
        assert_eq!(brain.name(), "SlowBrain");
    }

    #[tokio::test]
    async fn test_over_limit() {
        let limit = Duration::from_millis(10);
        let brain = TimeoutBrain::new(SlowBrain { delay: Duration::from_secs(5) }, limit);
        let result = brain.draft_agreement("u1", "r1").await;
        assert!(matches!(result, Err(BrainError::Timeout(d)) if d == limit));
    }

    #[tokio::test]
    async fn test_inner_errors_pass_through() {
        let brain = TimeoutBrain::new(SlowBrain { delay: Duration::ZERO }, Duration::from_secs(1));
        let result = brain.mediate(&[]).await;
        assert!(matches!(result, Err(BrainError::Unavailable(_))));
        assert!(brain.is_ready().await);
    }
}
