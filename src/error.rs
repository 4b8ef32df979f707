//! Error hierarchy for the attractor mapper.
//!
//! The numerical core is total; these errors only surface at the
//! construction and call boundary where callers can break the contract.

use thiserror::Error;

/// Root error type for mapper failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapperError {
    /// Malformed construction configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid call argument (non-finite input, zero step budget).
    #[error("validation error: {0}")]
    Validation(String),

    /// Attractor points disagree with the configured dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type MapperResult<T> = Result<T, MapperError>;
