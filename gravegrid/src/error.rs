use thiserror::Error;

/// Errors raised while validating the inputs of a placement run.
///
/// All variants except [`PlacementError::InvalidObstacle`] abort the run.
/// An invalid obstacle is skipped and reported as a diagnostic in the
/// [`PlacementResult`](crate::entities::PlacementResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("invalid region: {0}")]
    InvalidRegion(String),
    #[error("invalid item dimensions: width {width}, height {height}")]
    InvalidItemDimensions { width: f64, height: f64 },
    #[error("invalid spacing: {0}")]
    InvalidSpacing(f64),
    #[error("invalid rotation: {0}")]
    InvalidRotation(f64),
    #[error("invalid obstacle #{index}: {reason}")]
    InvalidObstacle { index: usize, reason: String },
}
