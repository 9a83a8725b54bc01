use log::{debug, info};

use crate::entities::{GraveSpec, PlacedGrave, PlacementResult, Yard};
use crate::geometry::geo_traits::Shape;
use crate::geometry::kernel;
use crate::geometry::primitives::{Circle, Point};
use crate::placement::grid::grid_cells;
use crate::util::assertions;

/// Greedy grid-scan packer.
///
/// Scans a grid of square cells with the size of a clearance circle over the bounding box of the region,
/// row by row from the bottom, and accepts a grave in a cell when:
/// * the region contains both the clearance circle and the rotated grave,
/// * the clearance circle touches no obstacle,
/// * the clearance circle touches no previously accepted clearance circle.
///
/// Accepted circles become obstacles for the remainder of the scan, so the result depends on the scan order.
/// There is no backtracking: the packing is greedy, not optimal.
#[derive(Clone, Copy, Debug)]
pub struct PlacementEngine {
    pub spec: GraveSpec,
}

impl PlacementEngine {
    pub fn new(spec: GraveSpec) -> Self {
        Self { spec }
    }

    pub fn place(&self, yard: &Yard) -> PlacementResult {
        let spec = &self.spec;
        let (diameter, radius) = (spec.diameter(), spec.radius());

        let mut graves: Vec<PlacedGrave> = vec![];
        let mut n_cells_scanned = 0;

        for cell in grid_cells(yard.region.bbox(), diameter) {
            n_cells_scanned += 1;
            let Point(x, y) = cell.origin;
            let anchor = Point(x + radius, y + radius);
            let clearance = Circle::new(anchor, radius);

            if !kernel::contains(&yard.region, &clearance) {
                continue;
            }

            let footprint = spec.footprint_at(anchor);
            let shape = kernel::rotate(&footprint, spec.rotation(), kernel::centroid(&footprint));

            let accepted = kernel::contains(&yard.region, &shape)
                && !yard
                    .obstacles
                    .iter()
                    .any(|obs| kernel::intersects(&clearance, obs))
                && !graves
                    .iter()
                    .any(|g| kernel::intersects(&clearance, &g.clearance));

            if accepted {
                debug!(
                    "[PLACE] grave #{} accepted in cell ({}, {}) at ({:.3}, {:.3})",
                    graves.len(),
                    cell.row,
                    cell.col,
                    anchor.0,
                    anchor.1
                );
                graves.push(PlacedGrave {
                    index: graves.len(),
                    cell: (cell.row, cell.col),
                    anchor,
                    shape,
                    clearance,
                });
            }
        }

        let result = PlacementResult {
            spec: *spec,
            graves,
            n_cells_scanned,
            skipped_obstacles: yard.skipped_obstacles.clone(),
        };

        info!(
            "[PLACE] placed {} graves ({}x{}, spacing {}, rotation {}°) after scanning {} cells, density: {:.3}%",
            result.len(),
            spec.width(),
            spec.height(),
            spec.spacing(),
            spec.rotation(),
            n_cells_scanned,
            result.density(yard) * 100.0
        );
        debug_assert!(assertions::result_is_valid(yard, &result));

        result
    }
}
