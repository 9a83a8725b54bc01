use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Transformable};
use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = point;

        let a = x - x1;
        let b = y - y1;
        let c = x2 - x1;
        let d = y2 - y1;

        let dot = a * c + b * d;
        let len_sq = c * c + d * d;
        let mut param = -1.0;
        if len_sq != 0.0 {
            param = dot / len_sq;
        }
        let (xx, yy) = match param {
            p if p < 0.0 => (x1, y1),              //start is the closest point
            p if p > 1.0 => (x2, y2),              //end is the closest point
            _ => (x1 + param * c, y1 + param * d), //closest point is on the edge
        };

        Point(xx, yy)
    }

    /// True if the two edges cross at a single point which is interior to both of them.
    /// Touching (an endpoint on the other edge) and collinear overlap are not proper crossings.
    pub fn crosses_properly(&self, other: &Edge) -> bool {
        if !self.bbox_overlaps(other) {
            return false;
        }
        let d1 = side(other, self.start);
        let d2 = side(other, self.end);
        let d3 = side(self, other.start);
        let d4 = side(self, other.end);

        strictly_opposite(d1, d2) && strictly_opposite(d3, d4)
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.start.0, self.end.0)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.start.1, self.end.1)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.start.0, self.end.0)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.start.1, self.end.1)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.start.0 + self.end.0) / 2.0,
            (self.start.1 + self.end.1) / 2.0,
        )
    }

    fn bbox_overlaps(&self, other: &Edge) -> bool {
        FPA(f64::max(self.x_min(), other.x_min())) <= FPA(f64::min(self.x_max(), other.x_max()))
            && FPA(f64::max(self.y_min(), other.y_min()))
                <= FPA(f64::min(self.y_max(), other.y_max()))
    }
}

/// Signed distance of `p` to the line through `edge`, positive on the left side.
fn side(edge: &Edge, p: Point) -> f64 {
    let Point(s_x, s_y) = edge.start;
    let Point(e_x, e_y) = edge.end;
    ((e_x - s_x) * (p.1 - s_y) - (e_y - s_y) * (p.0 - s_x)) / edge.length()
}

fn strictly_opposite(a: f64, b: f64) -> bool {
    let (a_zero, b_zero) = (FPA(a) == FPA(0.0), FPA(b) == FPA(0.0));
    !a_zero && !b_zero && (a > 0.0) != (b > 0.0)
}

impl Transformable for Edge {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform(t);
        end.transform(t);

        self
    }
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        let Point(x, y) = point;
        let Point(xx, yy) = self.closest_point_on_edge(point);

        let (dx, dy) = (x - xx, y - yy);
        dx.powi(2) + dy.powi(2)
    }
}

impl CollidesWith<Point> for Edge {
    fn collides_with(&self, point: &Point) -> bool {
        FPA(self.distance_to(point)) == FPA(0.0)
    }
}

impl CollidesWith<Edge> for Edge {
    #[inline(always)]
    fn collides_with(&self, other: &Edge) -> bool {
        if !self.bbox_overlaps(other) {
            return false;
        }
        if self.crosses_properly(other) {
            return true;
        }
        //touching or collinear: one of the endpoints lies on the other edge
        self.collides_with(&other.start)
            || self.collides_with(&other.end)
            || other.collides_with(&self.start)
            || other.collides_with(&self.end)
    }
}
