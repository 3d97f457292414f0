//! Error type shared by every breed fetcher

use thiserror::Error;

/// Message used when a breed is unknown and no better explanation is available
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Breed not found (main breed does not exist)";

/// The single failure a breed lookup can produce.
///
/// Unknown breeds, empty input and transport or decoding failures of the
/// remote API all surface as this one value. Only the message tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BreedNotFound {
    message: String,
}

impl BreedNotFound {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for empty or whitespace-only breed names
    pub fn empty_breed() -> Self {
        Self::new("Breed cannot be empty.")
    }

    /// Wrap a lower-level failure, naming the breed that was requested
    pub fn fetch_failed(breed: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to fetch sub-breeds for '{breed}': {cause}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for BreedNotFound {
    fn default() -> Self {
        Self::new(DEFAULT_NOT_FOUND_MESSAGE)
    }
}

/// Result alias for breed lookups
pub type Result<T> = std::result::Result<T, BreedNotFound>;
