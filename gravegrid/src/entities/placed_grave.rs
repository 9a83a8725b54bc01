use crate::geometry::primitives::{Circle, Point, SPolygon};

/// A grave accepted by the placement engine.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedGrave {
    /// Position in placement order, starting at 0
    pub index: usize,
    /// Row and column of the grid cell the grave was placed in
    pub cell: (usize, usize),
    /// Centroid of the un-rotated grave, rotation happens around it
    pub anchor: Point,
    /// The rotated grave
    pub shape: SPolygon,
    /// Conservative circular proxy of the grave plus its spacing
    pub clearance: Circle,
}
