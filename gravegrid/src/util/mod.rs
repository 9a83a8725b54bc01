/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::FPA_EPSILON;

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    match angle.rem_euclid(360.0) {
        //rem_euclid rounds tiny negative angles up to 360.0
        a if a >= 360.0 => 0.0,
        a => a,
    }
}
