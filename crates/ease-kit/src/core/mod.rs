pub mod approx;

pub use approx::{ApproxEq, APPROX_EQ_TOLERANCE, CMP_EPSILON};
