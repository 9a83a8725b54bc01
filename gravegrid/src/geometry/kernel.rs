//! Public predicates of the geometry kernel.
//!
//! Boundary ties are inclusive in both directions: a shape touching the boundary of a polygon is
//! contained by it, and two shapes touching each other intersect.

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Encloses, Shape, Transformable};
use crate::geometry::primitives::{Circle, Point, SPolygon};

/// Either of the two shapes the placement engine reasons about.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoShape {
    Polygon(SPolygon),
    Circle(Circle),
}

/// True if `inner` lies entirely within `outer`, boundary inclusive.
pub fn contains<T>(outer: &SPolygon, inner: &T) -> bool
where
    SPolygon: Encloses<T>,
{
    outer.encloses(inner)
}

/// True if `a` and `b` share any point, boundary-only contact included.
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: CollidesWith<B>,
{
    a.collides_with(b)
}

/// Rigid rotation of `shape` about `origin`, clockwise for positive `angle_degrees`.
pub fn rotate<T: Transformable>(shape: &T, angle_degrees: f64, origin: Point) -> T {
    shape.transform_clone(&Transformation::from_cw_degrees_about(
        angle_degrees,
        origin,
    ))
}

pub fn centroid(polygon: &SPolygon) -> Point {
    polygon.centroid()
}

/// `(min_x, min_y, max_x, max_y)` of the polygon
pub fn bounds(polygon: &SPolygon) -> (f64, f64, f64, f64) {
    polygon.bbox().bounds()
}

impl Transformable for GeoShape {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        match self {
            GeoShape::Polygon(sp) => {
                sp.transform(t);
            }
            GeoShape::Circle(c) => {
                c.transform(t);
            }
        }
        self
    }
}

impl CollidesWith<GeoShape> for GeoShape {
    fn collides_with(&self, other: &GeoShape) -> bool {
        match (self, other) {
            (GeoShape::Polygon(a), GeoShape::Polygon(b)) => a.collides_with(b),
            (GeoShape::Polygon(a), GeoShape::Circle(b)) => a.collides_with(b),
            (GeoShape::Circle(a), GeoShape::Polygon(b)) => a.collides_with(b),
            (GeoShape::Circle(a), GeoShape::Circle(b)) => a.collides_with(b),
        }
    }
}

impl Encloses<GeoShape> for SPolygon {
    fn encloses(&self, other: &GeoShape) -> bool {
        match other {
            GeoShape::Polygon(sp) => self.encloses(sp),
            GeoShape::Circle(c) => self.encloses(c),
        }
    }
}

impl From<SPolygon> for GeoShape {
    fn from(sp: SPolygon) -> Self {
        GeoShape::Polygon(sp)
    }
}

impl From<Circle> for GeoShape {
    fn from(c: Circle) -> Self {
        GeoShape::Circle(c)
    }
}
