use crate::entities::{GraveSpec, PlacedGrave, PlacementResult, Yard};
use crate::geometry::primitives::{Circle, SPolygon};
use crate::io::ext_repr::{
    ExtCircle, ExtGraveSpec, ExtPlacedGrave, ExtPlacementResult, ExtPolygon, ExtYard,
};

/// Exports a placement result out of the library
pub fn export_result(yard: &Yard, result: &PlacementResult) -> ExtPlacementResult {
    ExtPlacementResult {
        spec: export_grave_spec(&result.spec),
        graves: result.iter().map(export_placed_grave).collect(),
        n_cells_scanned: result.n_cells_scanned,
        skipped_obstacles: result
            .skipped_obstacles
            .iter()
            .map(|e| e.to_string())
            .collect(),
        density: result.density(yard),
    }
}

pub fn export_yard(yard: &Yard) -> ExtYard {
    ExtYard {
        region: export_polygon(&yard.region),
        obstacles: yard.obstacles.iter().map(export_polygon).collect(),
    }
}

pub fn export_grave_spec(spec: &GraveSpec) -> ExtGraveSpec {
    ExtGraveSpec {
        width: spec.width(),
        height: spec.height(),
        spacing: spec.spacing(),
        rotation: spec.rotation(),
    }
}

pub fn export_placed_grave(grave: &PlacedGrave) -> ExtPlacedGrave {
    ExtPlacedGrave {
        index: grave.index,
        cell: grave.cell,
        anchor: grave.anchor.into(),
        polygon: export_polygon(&grave.shape),
        clearance: export_circle(&grave.clearance),
    }
}

/// Closed ring: the first vertex is repeated at the end
pub fn export_polygon(polygon: &SPolygon) -> ExtPolygon {
    let ring: Vec<(f64, f64)> = polygon
        .vertices
        .iter()
        .chain(polygon.vertices.first())
        .map(|&p| p.into())
        .collect();
    ExtPolygon(ring)
}

pub fn export_circle(circle: &Circle) -> ExtCircle {
    ExtCircle {
        center: circle.center.into(),
        radius: circle.radius,
    }
}
