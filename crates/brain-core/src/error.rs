//! Error types for brain operations.

use thiserror::Error;

/// Errors that can occur while asking a brain for a result.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The brain is temporarily unavailable.
    #[error("brain unavailable: {0}")]
    Unavailable(String),

    /// The request was understood but no usable result came back.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The brain did not answer in time.
    #[error("processing timed out after {0:?}")]
    Timeout(std::time::Duration),
}
