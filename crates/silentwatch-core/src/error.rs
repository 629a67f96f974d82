//! Shared error types across silentwatch crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SilentWatchError>;

/// Process-level errors (config loading, startup wiring).
#[derive(Debug, Error)]
pub enum SilentWatchError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

/// Outcome categories of a single text-generation attempt.
///
/// Every variant is absorbed into an explanation string by
/// [`crate::explain::resolve`]; none of them reach the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No client configured, or no credential to call it with.
    #[error("text generation unavailable")]
    Unavailable,
    #[error("transport: {0}")]
    Transport(String),
    #[error("rate limited")]
    RateLimited,
    #[error("endpoint not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl GenerationError {
    /// Map a non-success HTTP status to its outcome category.
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => GenerationError::RateLimited,
            404 => GenerationError::NotFound,
            other => GenerationError::Status(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(GenerationError::from_status(429), GenerationError::RateLimited);
        assert_eq!(GenerationError::from_status(404), GenerationError::NotFound);
        assert_eq!(GenerationError::from_status(500), GenerationError::Status(500));
        assert_eq!(GenerationError::from_status(403), GenerationError::Status(403));
    }
}
