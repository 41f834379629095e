//! Error types for boxnms.

use thiserror::Error;

/// Result alias for boxnms operations.
pub type NmsResult<T> = std::result::Result<T, NmsError>;

/// Errors reported at the selection call boundary.
///
/// Numeric edge cases inside the suppression loop (degenerate boxes, zero
/// union area) are not errors; see [`crate::BoundingBox::iou`].
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NmsError {
    /// `boxes` and `scores` have different lengths.
    #[error("shape mismatch: {boxes} boxes but {scores} scores")]
    ShapeMismatch {
        /// Number of boxes supplied.
        boxes: usize,
        /// Number of scores supplied.
        scores: usize,
    },
    /// The IoU threshold is NaN and cannot be compared against.
    #[error("invalid iou threshold: {0}")]
    InvalidThreshold(f32),
    /// A score is NaN and cannot be ordered.
    #[error("invalid score at index {index}")]
    InvalidScore {
        /// Position of the offending score.
        index: usize,
    },
    /// A box has a NaN coordinate and cannot be measured.
    #[error("invalid box at index {index}")]
    InvalidBox {
        /// Position of the offending box.
        index: usize,
    },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
