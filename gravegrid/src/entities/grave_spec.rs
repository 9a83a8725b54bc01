use crate::PlacementError;
use crate::geometry::primitives::{Point, Rect, SPolygon};
use crate::util::normalize_degrees;

/// Dimensions, spacing and orientation shared by all graves of a placement run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraveSpec {
    width: f64,
    height: f64,
    spacing: f64,
    /// Clockwise rotation in degrees, within `[0, 360)`
    rotation: f64,
}

impl GraveSpec {
    pub fn new(
        width: f64,
        height: f64,
        spacing: f64,
        rotation: f64,
    ) -> Result<Self, PlacementError> {
        let valid_dimension = |d: f64| d.is_finite() && d > 0.0;
        if !valid_dimension(width) || !valid_dimension(height) {
            return Err(PlacementError::InvalidItemDimensions { width, height });
        }
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(PlacementError::InvalidSpacing(spacing));
        }
        if !rotation.is_finite() {
            return Err(PlacementError::InvalidRotation(rotation));
        }

        Ok(GraveSpec {
            width,
            height,
            spacing,
            rotation: normalize_degrees(rotation),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Diameter of the clearance circle, also the step of the scan grid
    pub fn diameter(&self) -> f64 {
        self.diagonal() + self.spacing
    }

    pub fn radius(&self) -> f64 {
        self.diameter() / 2.0
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The un-rotated grave centered around `center`.
    pub fn footprint_at(&self, Point(cx, cy): Point) -> SPolygon {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        SPolygon::from(Rect {
            x_min: cx - hw,
            y_min: cy - hh,
            x_max: cx + hw,
            y_max: cy + hh,
        })
    }
}
