use std::cmp::Ordering;

use float_cmp::F64Margin;

/// Absolute tolerance under which two coordinates (or distances) are considered equal.
pub const FPA_EPSILON: f64 = 1e-9;

const FPA_MARGIN: F64Margin = F64Margin {
    epsilon: FPA_EPSILON,
    ulps: 4,
};

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, FPA_MARGIN)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
