use anyhow::Result;

use crate::io::ext_repr::ExtYard;

mod json;
#[cfg(feature = "synthetic")]
mod synthetic;

#[doc(inline)]
pub use json::JsonYardSupplier;
#[cfg(feature = "synthetic")]
#[doc(inline)]
pub use synthetic::{SyntheticConfig, SyntheticYardSupplier};

/// Source of a region and its obstacles.
///
/// Suppliers are responsible for producing sensible geometry; invalid polygons are
/// rejected (region) or skipped (obstacles) when the yard is imported.
pub trait YardSupplier {
    fn extract(&mut self) -> Result<ExtYard>;
}
