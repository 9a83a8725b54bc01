use itertools::Itertools;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Encloses, Shape, Transformable};
use crate::geometry::primitives::{Circle, Edge, Point, Rect};
use crate::util::FPA;
use anyhow::{Result, bail, ensure};

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// It is a closed shape with a finite number of vertices and edges.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
///
/// Vertices are stored counterclockwise, without repeating the first vertex at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct SPolygon {
    /// Set of points that form the polygon
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// A closing point (equal to the first one) is accepted and dropped.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            bail!("simple polygon must have at least 3 points: {points:?}");
        }
        if !points.iter().all(Point::is_finite) {
            bail!("simple polygon contains non-finite coordinates: {points:?}");
        }
        if points.iter().unique().count() != points.len() {
            bail!("simple polygon should not contain duplicate points: {points:?}");
        }

        let area = match SPolygon::calculate_area(&points) {
            area if FPA(area) == FPA(0.0) => bail!("simple polygon has no area: {points:?}"),
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };

        ensure!(
            SPolygon::is_simple(&points),
            "polygon intersects itself: {points:?}"
        );

        let bbox = SPolygon::generate_bounding_box(&points);

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// True if none of the non-adjacent edges of the closed ring touch each other.
    pub fn is_simple(points: &[Point]) -> bool {
        let n = points.len();
        let edge = |i: usize| Edge {
            start: points[i],
            end: points[(i + 1) % n],
        };
        (0..n)
            .tuple_combinations()
            .filter(|&(i, j)| j != i + 1 && !(i == 0 && j == n - 1))
            .all(|(i, j)| !edge(i).collides_with(&edge(j)))
    }

    pub fn generate_bounding_box(points: &[Point]) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    /// Minimum distance between `point` and the boundary of the polygon, regardless of the side.
    pub fn distance_to_boundary(&self, point: &Point) -> f64 {
        self.edge_iter()
            .map(|edge| edge.distance_to(point))
            .fold(f64::INFINITY, f64::min)
    }

    /// True if `point` lies strictly inside the polygon, not on (or within tolerance of) its boundary.
    pub fn interior_contains(&self, point: &Point) -> bool {
        self.collides_with(point) && !self.edge_iter().any(|e| e.collides_with(point))
    }
}

impl Shape for SPolygon {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon

        let area = self.area();
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = (i + 1) % self.n_vertices();
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            c_x += (x_i + x_j) * (x_i * y_j - x_j * y_i);
            c_y += (y_i + y_j) * (x_i * y_j - x_j * y_i);
        }

        c_x /= 6.0 * area;
        c_y /= 6.0 * area;

        (c_x, c_y).into()
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            bbox,
            area: _,
        } = self;

        vertices.iter_mut().for_each(|p| {
            p.transform(t);
        });

        //regenerate bounding box
        *bbox = SPolygon::generate_bounding_box(vertices);

        self
    }
}

impl CollidesWith<Point> for SPolygon {
    fn collides_with(&self, point: &Point) -> bool {
        if !self.bbox.collides_with(point) {
            return false;
        }
        //points on the boundary are part of the polygon
        if self.edge_iter().any(|edge| edge.collides_with(point)) {
            return true;
        }
        //crossing number of a horizontal ray shot to the right: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        //the half-open comparison on y counts every vertex the ray passes through exactly once
        let Point(p_x, p_y) = *point;
        let mut inside = false;
        for edge in self.edge_iter() {
            let Point(s_x, s_y) = edge.start;
            let Point(e_x, e_y) = edge.end;
            if (s_y > p_y) != (e_y > p_y) {
                let x_cross = s_x + (p_y - s_y) * (e_x - s_x) / (e_y - s_y);
                if p_x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl CollidesWith<Circle> for SPolygon {
    fn collides_with(&self, circle: &Circle) -> bool {
        if !self.bbox.collides_with(&circle.bbox()) {
            return false;
        }
        self.collides_with(&circle.center) || self.edge_iter().any(|e| circle.collides_with(&e))
    }
}

impl CollidesWith<SPolygon> for SPolygon {
    fn collides_with(&self, other: &SPolygon) -> bool {
        if !self.bbox.collides_with(&other.bbox) {
            return false;
        }
        self.edge_iter()
            .cartesian_product(other.edge_iter().collect_vec())
            .any(|(e1, e2)| e1.collides_with(&e2))
            || self.collides_with(&other.vertex(0))
            || other.collides_with(&self.vertex(0))
    }
}

impl CollidesWith<SPolygon> for Circle {
    fn collides_with(&self, other: &SPolygon) -> bool {
        other.collides_with(self)
    }
}

impl Encloses<Circle> for SPolygon {
    fn encloses(&self, circle: &Circle) -> bool {
        //exact circle-in-polygon test: the center lies inside and the boundary is at least one radius away
        self.collides_with(&circle.center)
            && FPA(self.distance_to_boundary(&circle.center)) >= FPA(circle.radius)
    }
}

impl Encloses<SPolygon> for SPolygon {
    fn encloses(&self, inner: &SPolygon) -> bool {
        //all vertices of the inner polygon inside (or on the boundary of) the outer one
        inner.vertices.iter().all(|v| self.collides_with(v))
            //no edge of the inner polygon leaves the outer one
            && !inner
                .edge_iter()
                .any(|ie| self.edge_iter().any(|oe| ie.crosses_properly(&oe)))
            //no reflex part of the outer polygon pokes into the inner one
            && !self.vertices.iter().any(|v| inner.interior_contains(v))
            && inner.edge_iter().all(|e| self.collides_with(&e.centroid()))
    }
}

impl From<Rect> for SPolygon {
    fn from(r: Rect) -> Self {
        SPolygon {
            vertices: r.corners().to_vec(),
            bbox: r,
            area: r.area(),
        }
    }
}
