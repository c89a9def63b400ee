use thiserror::Error;

/// Errors terminating a resolution attempt.
///
/// Display strings double as the caller-facing body messages, so they
/// match the wire contract verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The raw request path was missing or empty.
    #[error("Invalid path parameter")]
    InvalidInput,
    /// No record exists for the code. Store read failures of any kind
    /// collapse into this variant; transient errors are deliberately
    /// not distinguished from true absence.
    #[error("Short URL not found.")]
    NotFound,
    /// A record exists but its bytes do not parse as a URL record.
    #[error("Malformed URL data.")]
    InvalidData,
}
