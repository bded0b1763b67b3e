//! Error types for spatial RIR processing

use thiserror::Error;

/// Spatial RIR processing error types
#[derive(Error, Debug)]
pub enum SpatialError {
    /// Invalid channel count
    #[error("Invalid channel count: expected {expected}, got {got}")]
    InvalidChannelCount { expected: usize, got: usize },

    /// Encoding matrix could not be inverted
    #[error("Singular encoding matrix: capsule directions are degenerate")]
    SingularMatrix,
}

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;
