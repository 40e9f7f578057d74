//! Core trait and types for the matching intelligence.
//!
//! This crate provides the shared interface between the HTTP service and
//! whatever produces preferences, compatibility scores, agreements, and
//! mediation advice. It defines:
//!
//! - [`Brain`] - The trait that all brain implementations must implement
//! - [`MatchScore`] / [`ChatTurn`] - Types exchanged with a brain
//! - [`BrainError`] - Error types for brain operations
//! - [`TimeoutBrain`] - Wrapper that puts a deadline on every call
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, Brain, BrainError, ChatTurn, MatchScore};
//! use database::{Preferences, Room, User};
//!
//! struct QuietBrain;
//!
//! #[async_trait]
//! impl Brain for QuietBrain {
//!     async fn extract_preferences(&self, _: &serde_json::Value) -> Result<Preferences, BrainError> {
//!         Ok(Preferences { noise_level: Some(1), ..Default::default() })
//!     }
//!
//!     async fn score(&self, _: Option<&User>, _: &Room) -> Result<MatchScore, BrainError> {
//!         Err(BrainError::Unavailable("not trained".to_string()))
//!     }
//!
//!     async fn draft_agreement(&self, _: &str, _: &str) -> Result<String, BrainError> {
//!         Ok("No noise after 9 PM.".to_string())
//!     }
//!
//!     async fn mediate(&self, _: &[ChatTurn]) -> Result<Vec<String>, BrainError> {
//!         Ok(vec!["Use headphones.".to_string()])
//!     }
//!
//!     fn name(&self) -> &str {
//!         "QuietBrain"
//!     }
//! }
//! ```

mod error;
mod timeout;
mod trait_def;
mod types;

pub use error::BrainError;
pub use timeout::TimeoutBrain;
pub use trait_def::Brain;
pub use types::{ChatTurn, MatchScore};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
