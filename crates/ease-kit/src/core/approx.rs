// core/approx.rs
//
// Approximate float comparisons. The easing table's boundary snapping is
// built on these, so the tolerances are fixed constants rather than
// `f32::EPSILON` and friends.

/// Absolute tolerance for "is this effectively zero / one" checks.
pub const CMP_EPSILON: f64 = 1e-6;

/// Tolerance used by [`ApproxEq::approx_eq`].
///
/// Carried over unchanged from the host engine's general-purpose helper.
/// It is much larger than a typical epsilon; callers that want a tight
/// comparison should use [`ApproxEq::is_equal_approx`] or
/// [`ApproxEq::approx_eq_with`].
pub const APPROX_EQ_TOLERANCE: f64 = 8.854187817;

/// Approximate comparisons for `f32` and `f64`.
pub trait ApproxEq: Copy {
    /// `|self| < CMP_EPSILON`.
    fn is_zero_approx(self) -> bool;

    /// Exactly equal, or within `CMP_EPSILON` of each other.
    fn is_equal_approx(self, other: Self) -> bool;

    /// Within an explicit absolute tolerance.
    fn approx_eq_with(self, other: Self, tolerance: Self) -> bool;

    /// Within [`APPROX_EQ_TOLERANCE`].
    fn approx_eq(self, other: Self) -> bool;
}

macro_rules! impl_approx_eq {
    ($t:ty) => {
        impl ApproxEq for $t {
            #[inline]
            fn is_zero_approx(self) -> bool {
                self.abs() < CMP_EPSILON as $t
            }

            #[inline]
            fn is_equal_approx(self, other: Self) -> bool {
                // Also catches equal infinities, where the difference is NaN.
                if self == other {
                    return true;
                }
                (self - other).abs() < CMP_EPSILON as $t
            }

            #[inline]
            fn approx_eq_with(self, other: Self, tolerance: Self) -> bool {
                (self - other).abs() < tolerance
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self.approx_eq_with(other, APPROX_EQ_TOLERANCE as $t)
            }
        }
    };
}

impl_approx_eq!(f32);
impl_approx_eq!(f64);
