use crate::PlacementError;
use crate::entities::{GraveSpec, Yard};
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtGraveSpec, ExtPolygon, ExtYard};

/// Converts an external yard into a validated [`Yard`].
pub fn import_yard(ext_yard: &ExtYard) -> Result<Yard, PlacementError> {
    let region = import_polygon(&ext_yard.region);
    let obstacles = ext_yard.obstacles.iter().map(import_polygon).collect();
    Yard::new(region, obstacles)
}

pub fn import_grave_spec(ext_spec: &ExtGraveSpec) -> Result<GraveSpec, PlacementError> {
    let ExtGraveSpec {
        width,
        height,
        spacing,
        rotation,
    } = *ext_spec;
    GraveSpec::new(width, height, spacing, rotation)
}

pub fn import_polygon(ext_polygon: &ExtPolygon) -> Vec<Point> {
    ext_polygon.0.iter().map(|&p| Point::from(p)).collect()
}
