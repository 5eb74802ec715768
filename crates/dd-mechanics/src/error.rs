//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A die must have at least one side.
    #[error("invalid die: {0} sides (must be at least 1)")]
    InvalidDie(u32),

    /// A name or short code does not match any attribute.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
