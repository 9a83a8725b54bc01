use std::ops::{Add, Mul};

use ordered_float::NotNan;

use crate::geometry::primitives::Point;
use crate::util::normalize_degrees;

//See https://pages.mtu.edu/~shene/COURSES/cs3621/NOTES/geometry/geo-tran.html

/// Proper rigid transformation in matrix form
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub fn from_translation((tx, ty): (f64, f64)) -> Self {
        Self {
            matrix: transl_m((tx, ty)),
        }
    }

    /// Clockwise rotation around the origin, `angle` in degrees.
    ///
    /// The angle is normalized into `[0, 360)`. Quarter turns use exact sine and cosine values,
    /// so axis-aligned shapes stay exactly axis-aligned.
    pub fn from_cw_degrees(angle: f64) -> Self {
        let (sin, cos) = cw_sin_cos(angle);
        Self {
            matrix: rot_m(sin, cos),
        }
    }

    /// Clockwise rotation of `angle` degrees around `origin`.
    pub fn from_cw_degrees_about(angle: f64, Point(ox, oy): Point) -> Self {
        Self::from_translation((-ox, -oy))
            .transform(&Self::from_cw_degrees(angle))
            .translate((ox, oy))
    }

    pub fn translate(mut self, (tx, ty): (f64, f64)) -> Self {
        self.matrix = dot_prod(&transl_m((tx, ty)), &self.matrix);
        self
    }

    /// Applies `other` after `self`.
    pub fn transform(mut self, other: &Self) -> Self {
        self.matrix = dot_prod(&other.matrix, &self.matrix);
        self
    }

    pub fn matrix(&self) -> &[[NotNan<f64>; 3]; 3] {
        &self.matrix
    }
}

/// Sine and cosine of a clockwise rotation of `angle` degrees, exact for multiples of 90°.
fn cw_sin_cos(angle: f64) -> (f64, f64) {
    let normalized = normalize_degrees(angle);
    // clockwise rotation is a counterclockwise rotation over the negated angle
    match normalized {
        a if a == 0.0 => (0.0, 1.0),
        a if a == 90.0 => (-1.0, 0.0),
        a if a == 180.0 => (0.0, -1.0),
        a if a == 270.0 => (1.0, 0.0),
        a => (-a).to_radians().sin_cos(),
    }
}

const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

fn rot_m(sin: f64, cos: f64) -> [[NotNan<f64>; 3]; 3] {
    let cos = NotNan::new(cos).expect("cos is NaN");
    let sin = NotNan::new(sin).expect("sin is NaN");

    [[cos, -sin, _0], [sin, cos, _0], [_0, _0, _1]]
}

fn transl_m((tx, ty): (f64, f64)) -> [[NotNan<f64>; 3]; 3] {
    let h = NotNan::new(tx).expect("tx is NaN");
    let k = NotNan::new(ty).expect("ty is NaN");

    [[_1, _0, h], [_0, _1, k], [_0, _0, _1]]
}

#[inline(always)]
fn dot_prod<T>(l: &[[T; 3]; 3], r: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Copy,
{
    [
        [
            l[0][0] * r[0][0] + l[0][1] * r[1][0] + l[0][2] * r[2][0],
            l[0][0] * r[0][1] + l[0][1] * r[1][1] + l[0][2] * r[2][1],
            l[0][0] * r[0][2] + l[0][1] * r[1][2] + l[0][2] * r[2][2],
        ],
        [
            l[1][0] * r[0][0] + l[1][1] * r[1][0] + l[1][2] * r[2][0],
            l[1][0] * r[0][1] + l[1][1] * r[1][1] + l[1][2] * r[2][1],
            l[1][0] * r[0][2] + l[1][1] * r[1][2] + l[1][2] * r[2][2],
        ],
        [
            l[2][0] * r[0][0] + l[2][1] * r[1][0] + l[2][2] * r[2][0],
            l[2][0] * r[0][1] + l[2][1] * r[1][1] + l[2][2] * r[2][1],
            l[2][0] * r[0][2] + l[2][1] * r[1][2] + l[2][2] * r[2][2],
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns_are_exact() {
        assert_eq!(cw_sin_cos(90.0), (-1.0, 0.0));
        assert_eq!(cw_sin_cos(-270.0), (-1.0, 0.0));
        assert_eq!(cw_sin_cos(540.0), (0.0, -1.0));
    }

    #[test]
    fn rotation_about_a_point_keeps_it_fixed() {
        let origin = Point(3.0, -2.0);
        let t = Transformation::from_cw_degrees_about(37.0, origin);
        let m = t.matrix();
        let x = m[0][0].into_inner() * origin.0 + m[0][1].into_inner() * origin.1 + m[0][2].into_inner();
        let y = m[1][0].into_inner() * origin.0 + m[1][1].into_inner() * origin.1 + m[1][2].into_inner();
        assert!((x - origin.0).abs() < 1e-12 && (y - origin.1).abs() < 1e-12);
    }
}
