mod grave_spec;
mod placed_grave;
mod placement_result;
mod yard;

#[doc(inline)]
pub use grave_spec::GraveSpec;
#[doc(inline)]
pub use placed_grave::PlacedGrave;
#[doc(inline)]
pub use placement_result::PlacementResult;
#[doc(inline)]
pub use yard::Yard;
