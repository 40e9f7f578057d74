//! Mock brain implementations for the Roomie service.
//!
//! This crate provides stand-ins for a real matching model:
//! - `FixedBrain` - Returns the same preferences, score, agreement and advice for every input
//! - `DelayedBrain` - Wraps another brain with artificial delay
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, FixedBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = FixedBrain::new();
//!
//!     let agreement = brain.draft_agreement("u1", "1718000000000").await?;
//!     println!("{}", agreement);
//!     Ok(())
//! }
//! ```

mod delayed;
mod fixed;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, ChatTurn, MatchScore};

pub use delayed::DelayedBrain;
pub use fixed::{FixedBrain, AGREEMENT, SUGGESTIONS};
