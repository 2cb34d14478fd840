//! Error types for grid encoding, cell navigation and region algebra.

use thiserror::Error;

/// Every failure the grid can report.
///
/// All variants describe deterministic caller errors; none of them is
/// transient, so nothing in the crate retries or substitutes defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoSotError {
    #[error("precision {precision} outside supported range [{min}, {max}]")]
    InvalidPrecision { precision: u8, min: u8, max: u8 },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("cell at level {0} has no parent")]
    NoParent(u8),

    #[error("cell at level {0} is already at maximum depth")]
    MaxDepthReached(u8),

    #[error("level mismatch: {left} vs {right}")]
    LevelMismatch { left: u8, right: u8 },

    #[error("code {code} is not valid at level {level}")]
    InvalidCode { code: u64, level: u8 },

    #[error("axis index {index} out of range at level {level}")]
    AxisIndexOutOfRange { index: i64, level: u8 },

    #[error("invalid cell string: {0:?}")]
    InvalidCellString(String),

    #[error("invalid rectangle: {0}")]
    InvalidRectangle(String),

    #[error("region of {cells} cells exceeds limit of {limit}")]
    TooManyCells { cells: u64, limit: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeoSotError>;
