mod engine;
mod grid;

#[doc(inline)]
pub use engine::PlacementEngine;
#[doc(inline)]
pub use grid::{GridCell, grid_cells};

use crate::PlacementError;
use crate::entities::{GraveSpec, PlacementResult, Yard};
use crate::geometry::primitives::Point;

/// Places as many `item_width` by `item_height` graves as the greedy grid scan allows inside `region`,
/// avoiding `obstacles`, with clearance circles at least `spacing` apart, rotated clockwise by `rotation_degrees`.
///
/// Inputs are validated up front: an invalid region or invalid item dimensions abort the call,
/// invalid obstacles are skipped and reported in [`PlacementResult::skipped_obstacles`].
/// Once validated, the scan always terminates with a (possibly empty) result.
pub fn place(
    region: &[Point],
    obstacles: &[Vec<Point>],
    item_width: f64,
    item_height: f64,
    spacing: f64,
    rotation_degrees: f64,
) -> Result<PlacementResult, PlacementError> {
    let yard = Yard::new(region.to_vec(), obstacles.to_vec())?;
    let spec = GraveSpec::new(item_width, item_height, spacing, rotation_degrees)?;

    Ok(PlacementEngine::new(spec).place(&yard))
}
