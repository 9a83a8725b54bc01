use crate::PlacementError;
use crate::entities::{GraveSpec, PlacedGrave, Yard};
use crate::geometry::primitives::{Circle, SPolygon};

/// Outcome of a placement run: the accepted graves in scan order.
///
/// Identical inputs always produce identical results, including their order.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementResult {
    pub spec: GraveSpec,
    pub graves: Vec<PlacedGrave>,
    /// Number of grid cells evaluated during the scan
    pub n_cells_scanned: usize,
    /// Obstacles which were skipped because they were not valid polygons
    pub skipped_obstacles: Vec<PlacementError>,
}

impl PlacementResult {
    pub fn len(&self) -> usize {
        self.graves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedGrave> {
        self.graves.iter()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &SPolygon> {
        self.graves.iter().map(|g| &g.shape)
    }

    pub fn clearance_circles(&self) -> impl Iterator<Item = &Circle> {
        self.graves.iter().map(|g| &g.clearance)
    }

    /// Total area occupied by the graves themselves (spacing excluded)
    pub fn covered_area(&self) -> f64 {
        self.len() as f64 * self.spec.area()
    }

    /// Fraction of the region covered by graves
    pub fn density(&self, yard: &Yard) -> f64 {
        self.covered_area() / yard.area()
    }
}

impl<'a> IntoIterator for &'a PlacementResult {
    type Item = &'a PlacedGrave;
    type IntoIter = std::slice::Iter<'a, PlacedGrave>;

    fn into_iter(self) -> Self::IntoIter {
        self.graves.iter()
    }
}
