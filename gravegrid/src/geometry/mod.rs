/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// The public predicates of the geometry kernel: containment, intersection, rotation
pub mod kernel;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod transformation;

#[doc(inline)]
pub use transformation::Transformation;
