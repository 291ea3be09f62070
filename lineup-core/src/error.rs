//! Error types for the lineup planner.

use thiserror::Error;

/// Errors that can occur in lineup operations.
///
/// Lookup misses (a favorited id absent from the dataset, a stage absent
/// from a day's derived stage list) are handled by omission everywhere and
/// deliberately have no variant here.
#[derive(Error, Debug)]
pub enum LineupError {
    /// A performance in the dataset violates a data invariant. Raised at
    /// the loading boundary, never inside the schedule algorithms.
    #[error("Invalid performance '{id}': {reason}")]
    Validation { id: String, reason: String },

    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Favorites storage error: {0}")]
    Storage(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lineup operations.
pub type LineupResult<T> = Result<T, LineupError>;
