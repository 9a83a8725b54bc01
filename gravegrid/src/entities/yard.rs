use log::warn;

use crate::PlacementError;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, SPolygon};

/// The region in which graves are placed, together with the obstacles they must avoid.
/// Immutable once constructed.
#[derive(Clone, Debug)]
pub struct Yard {
    pub region: SPolygon,
    /// Valid obstacles, in the order they were supplied
    pub obstacles: Vec<SPolygon>,
    /// Diagnostics of the supplied obstacles which were not valid polygons and were skipped
    pub skipped_obstacles: Vec<PlacementError>,
}

impl Yard {
    /// Validates the region and the obstacles.
    ///
    /// Fails with [`PlacementError::InvalidRegion`] if the region is not a simple polygon with a positive area.
    /// Invalid obstacles are dropped, logged and recorded as [`PlacementError::InvalidObstacle`].
    pub fn new(region: Vec<Point>, obstacles: Vec<Vec<Point>>) -> Result<Self, PlacementError> {
        let region =
            SPolygon::new(region).map_err(|e| PlacementError::InvalidRegion(e.to_string()))?;

        let mut valid_obstacles = Vec::with_capacity(obstacles.len());
        let mut skipped_obstacles = vec![];
        for (index, points) in obstacles.into_iter().enumerate() {
            match SPolygon::new(points) {
                Ok(obstacle) => valid_obstacles.push(obstacle),
                Err(e) => {
                    let diagnostic = PlacementError::InvalidObstacle {
                        index,
                        reason: e.to_string(),
                    };
                    warn!("[YARD] skipping obstacle: {diagnostic}");
                    skipped_obstacles.push(diagnostic);
                }
            }
        }

        Ok(Yard {
            region,
            obstacles: valid_obstacles,
            skipped_obstacles,
        })
    }

    pub fn area(&self) -> f64 {
        self.region.area()
    }
}
