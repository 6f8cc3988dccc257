//! Easing curves and small math helpers for game code.
//!
//! ```
//! use ease_kit::{ease, Easing};
//!
//! assert_eq!(ease(Easing::QuadraticIn, 0.5_f32), 0.25);
//! assert_eq!(Easing::CubicInOut.apply(0.25_f64), 0.0625);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use config::EasingPresets;
pub use crate::core::approx::{ApproxEq, APPROX_EQ_TOLERANCE, CMP_EPSILON};
pub use error::{Error, ParseEasingError, Result};
pub use extensions::{ease, ease_between, Curve, Easing, Family, Lerp, Mode};

#[cfg(feature = "vectors")]
pub use extensions::{PlanarExt, TransformExt};
