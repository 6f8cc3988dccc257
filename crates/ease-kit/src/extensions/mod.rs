// extensions/mod.rs
//
// Stateless helpers layered over plain floats and glam types.
// Nothing here owns state; callers opt in per call site.

pub mod curves;
pub mod easing;
pub mod interp;
#[cfg(feature = "vectors")]
pub mod transform;
#[cfg(feature = "vectors")]
pub mod vector;

pub use curves::Curve;
pub use easing::{ease, Easing, Family, Mode};
pub use interp::{ease_between, Lerp};
#[cfg(feature = "vectors")]
pub use transform::TransformExt;
#[cfg(feature = "vectors")]
pub use vector::PlanarExt;
