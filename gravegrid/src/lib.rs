#![doc = document_features::document_features!()]
//! Obstacle-aware grid packing of congruent rectangles ("graves") inside a polygonal region ("yard").

/// Geometric primitives and the predicates used by the placement engine
pub mod geometry;

/// Entities modelling the yard, the graves to place and the result of a placement run
pub mod entities;

/// The greedy grid-scan placement engine
pub mod placement;

/// Importing yards into and exporting placement results out of this library
pub mod io;

/// Sources of yards: JSON files and (optionally) a seeded synthetic generator
pub mod supply;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PlacementError;

#[doc(inline)]
pub use placement::place;
