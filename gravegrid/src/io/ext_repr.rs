use serde::{Deserialize, Serialize};

/// External representation of a [`SPolygon`](crate::geometry::primitives::SPolygon).
/// A closed ring of points, the first point may or may not be repeated at the end.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPolygon(pub Vec<(f64, f64)>);

/// External representation of a [`Yard`](crate::entities::Yard).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtYard {
    /// Outer boundary of the region in which graves are placed
    pub region: ExtPolygon,
    /// Zones which graves (and their clearance) must avoid
    #[serde(default)]
    pub obstacles: Vec<ExtPolygon>,
}

/// External representation of a [`GraveSpec`](crate::entities::GraveSpec).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtGraveSpec {
    pub width: f64,
    pub height: f64,
    /// Minimum gap between the clearance circles of neighbouring graves
    #[serde(default)]
    pub spacing: f64,
    /// Clockwise rotation in degrees
    #[serde(default)]
    pub rotation: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCircle {
    pub center: (f64, f64),
    pub radius: f64,
}

/// External representation of a [`PlacedGrave`](crate::entities::PlacedGrave).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedGrave {
    /// Position in placement order
    pub index: usize,
    /// Row and column of the scan grid
    pub cell: (usize, usize),
    /// Center of the grave, around which it was rotated
    pub anchor: (f64, f64),
    /// The rotated grave as a closed ring
    pub polygon: ExtPolygon,
    pub clearance: ExtCircle,
}

/// External representation of a [`PlacementResult`](crate::entities::PlacementResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacementResult {
    pub spec: ExtGraveSpec,
    pub graves: Vec<ExtPlacedGrave>,
    pub n_cells_scanned: usize,
    /// Diagnostics of the obstacles which were skipped
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped_obstacles: Vec<String>,
    /// Fraction of the region covered by graves
    pub density: f64,
}
