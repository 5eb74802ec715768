//! Error types for scenario loading and character creation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for creation operations.
pub type CreationResult<T> = Result<T, CreationError>;

/// Errors that abort a creation run.
///
/// Unknown attribute keys inside reward, penalty, or starting maps are not
/// errors; they are dropped while the scenario is read.
#[derive(Debug, Error)]
pub enum CreationError {
    /// The scenario file could not be read.
    #[error("failed to read scenario {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The scenario file is not valid scenario JSON.
    #[error("failed to parse scenario {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// An answer tests an attribute that does not exist.
    #[error("answer '{answer}' tests unknown attribute '{name}'")]
    UnknownTestAttribute {
        /// ID of the offending answer.
        answer: String,
        /// The unresolved attribute name.
        name: String,
    },

    /// A question has nothing to choose from.
    #[error("question for year {year} has an empty answer pool")]
    EmptyAnswerPool {
        /// Year of the offending question.
        year: i32,
    },

    /// Scenario validation found one or more problems.
    #[error("invalid scenario: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// The roll gate failed to read operator input.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    /// Dice or attribute error.
    #[error("{0}")]
    Mechanics(#[from] dd_mechanics::MechError),
}
