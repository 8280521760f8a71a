//! Error types for scale factor construction.

use thiserror::Error;

/// Result type for scale operations.
pub type Result<T> = std::result::Result<T, ScaleError>;

/// Errors that can occur when building a scale factor.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ScaleError {
    /// Factor was zero, negative, NaN or infinite.
    #[error("scale factor must be > 0, got {0}")]
    InvalidFactor(f32),
}
