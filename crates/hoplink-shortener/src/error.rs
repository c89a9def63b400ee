use hoplink_core::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CreateError {
    /// The request body is missing, malformed, or fails validation.
    /// Carries the human-readable reason surfaced to the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The store write failed. Fatal for this request, not retried.
    #[error("store write failed: {0}")]
    Storage(String),
}

impl From<StoreError> for CreateError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value.to_string())
    }
}
