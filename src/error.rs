//! Error types for dxf2lira

use std::io;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// IO error occurred while reading the drawing or writing the result
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A value that should be numeric could not be parsed
    #[error("Invalid number '{value}' at line {line}")]
    InvalidNumber { value: String, line: usize },

    /// A coordinate too large to compare at the configured precision
    #[error("Coordinate '{value}' at line {line} is out of range at precision {precision}")]
    CoordinateOutOfRange {
        value: String,
        line: usize,
        precision: u32,
    },

    /// A 3DFACE whose corners collapse to fewer than three points
    #[error("3DFACE ending at line {line} has only {corners} distinct corners")]
    DegenerateFace { corners: usize, line: usize },

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Whether the error only affects the entity being decoded.
    ///
    /// Recoverable errors are skipped in failsafe mode; everything else
    /// aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidNumber { .. }
                | ConvertError::CoordinateOutOfRange { .. }
                | ConvertError::DegenerateFace { .. }
        )
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
