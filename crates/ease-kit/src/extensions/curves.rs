// extensions/curves.rs
//
// The closed-form easing curves, as extension methods on f32 and f64.
// Formulas follow the easings.net catalog. Input is not clamped: values
// outside [0, 1] extrapolate the formula.

use crate::core::approx::ApproxEq;

/// Overshoot amount for the Back family.
pub const BACK_OVERSHOOT: f64 = 1.70158;
/// `BACK_OVERSHOOT * 1.525`, the InOut overshoot.
pub const BACK_IN_OUT_OVERSHOOT: f64 = 2.594909;
/// Period factor for the Elastic InOut curve (`2π / 4.5`).
pub const ELASTIC_IN_OUT_PERIOD: f64 = 1.396263402;

/// Easing curves evaluated on a normalized progress value.
///
/// Exponential and Elastic snap to exactly `0` / `1` when the input is within
/// [`CMP_EPSILON`](crate::core::approx::CMP_EPSILON) of the domain edge.
pub trait Curve: ApproxEq {
    fn ease_sine_in(self) -> Self;
    fn ease_sine_out(self) -> Self;
    fn ease_sine_in_out(self) -> Self;

    fn ease_quadratic_in(self) -> Self;
    fn ease_quadratic_out(self) -> Self;
    fn ease_quadratic_in_out(self) -> Self;

    fn ease_cubic_in(self) -> Self;
    fn ease_cubic_out(self) -> Self;
    fn ease_cubic_in_out(self) -> Self;

    fn ease_quartic_in(self) -> Self;
    fn ease_quartic_out(self) -> Self;
    fn ease_quartic_in_out(self) -> Self;

    fn ease_quintic_in(self) -> Self;
    fn ease_quintic_out(self) -> Self;
    fn ease_quintic_in_out(self) -> Self;

    fn ease_exponential_in(self) -> Self;
    fn ease_exponential_out(self) -> Self;
    fn ease_exponential_in_out(self) -> Self;

    fn ease_circular_in(self) -> Self;
    fn ease_circular_out(self) -> Self;
    fn ease_circular_in_out(self) -> Self;

    /// Pulls back before moving forward.
    fn ease_back_in(self) -> Self;
    /// Overshoots the target, then settles.
    fn ease_back_out(self) -> Self;
    fn ease_back_in_out(self) -> Self;

    fn ease_elastic_in(self) -> Self;
    /// Spring-like oscillation around the target.
    fn ease_elastic_out(self) -> Self;
    fn ease_elastic_in_out(self) -> Self;
}

macro_rules! impl_curve {
    ($t:ident) => {
        impl Curve for $t {
            // Sine
            #[inline]
            fn ease_sine_in(self) -> Self {
                1.0 - (self * std::$t::consts::PI / 2.0).cos()
            }
            #[inline]
            fn ease_sine_out(self) -> Self {
                (self * std::$t::consts::PI / 2.0).sin()
            }
            #[inline]
            fn ease_sine_in_out(self) -> Self {
                -((std::$t::consts::PI * self).cos() - 1.0) / 2.0
            }

            // Quadratic
            #[inline]
            fn ease_quadratic_in(self) -> Self {
                self * self
            }
            #[inline]
            fn ease_quadratic_out(self) -> Self {
                1.0 - (1.0 - self).powi(2)
            }
            #[inline]
            fn ease_quadratic_in_out(self) -> Self {
                if self < 0.5 {
                    2.0 * self * self
                } else {
                    1.0 - (-2.0 * self + 2.0).powi(2) / 2.0
                }
            }

            // Cubic
            #[inline]
            fn ease_cubic_in(self) -> Self {
                self * self * self
            }
            #[inline]
            fn ease_cubic_out(self) -> Self {
                1.0 - (1.0 - self).powi(3)
            }
            #[inline]
            fn ease_cubic_in_out(self) -> Self {
                if self < 0.5 {
                    4.0 * self * self * self
                } else {
                    1.0 - (-2.0 * self + 2.0).powi(3) / 2.0
                }
            }

            // Quartic
            #[inline]
            fn ease_quartic_in(self) -> Self {
                self * self * self * self
            }
            #[inline]
            fn ease_quartic_out(self) -> Self {
                1.0 - (1.0 - self).powi(4)
            }
            #[inline]
            fn ease_quartic_in_out(self) -> Self {
                if self < 0.5 {
                    8.0 * self * self * self * self
                } else {
                    1.0 - (-2.0 * self + 2.0).powi(4) / 2.0
                }
            }

            // Quintic
            #[inline]
            fn ease_quintic_in(self) -> Self {
                self * self * self * self * self
            }
            #[inline]
            fn ease_quintic_out(self) -> Self {
                1.0 - (1.0 - self).powi(5)
            }
            #[inline]
            fn ease_quintic_in_out(self) -> Self {
                if self < 0.5 {
                    16.0 * self * self * self * self * self
                } else {
                    1.0 - (-2.0 * self + 2.0).powi(5) / 2.0
                }
            }

            // Exponential
            #[inline]
            fn ease_exponential_in(self) -> Self {
                if self.is_zero_approx() {
                    0.0
                } else {
                    (2.0 as $t).powf(10.0 * self - 10.0)
                }
            }
            #[inline]
            fn ease_exponential_out(self) -> Self {
                if self.is_equal_approx(1.0) {
                    1.0
                } else {
                    1.0 - (2.0 as $t).powf(-10.0 * self)
                }
            }
            #[inline]
            fn ease_exponential_in_out(self) -> Self {
                if self.is_zero_approx() {
                    0.0
                } else if self.is_equal_approx(1.0) {
                    1.0
                } else if self < 0.5 {
                    (2.0 as $t).powf(20.0 * self - 10.0) / 2.0
                } else {
                    (2.0 - (2.0 as $t).powf(-20.0 * self + 10.0)) / 2.0
                }
            }

            // Circular
            #[inline]
            fn ease_circular_in(self) -> Self {
                1.0 - (1.0 - self * self).sqrt()
            }
            #[inline]
            fn ease_circular_out(self) -> Self {
                (1.0 - (self - 1.0).powi(2)).sqrt()
            }
            #[inline]
            fn ease_circular_in_out(self) -> Self {
                if self < 0.5 {
                    (1.0 - (1.0 - (2.0 * self).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * self + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            // Back (overshoot)
            #[inline]
            fn ease_back_in(self) -> Self {
                const C1: $t = BACK_OVERSHOOT as $t;
                const C3: $t = C1 + 1.0;
                C3 * self * self * self - C1 * self * self
            }
            #[inline]
            fn ease_back_out(self) -> Self {
                const C1: $t = BACK_OVERSHOOT as $t;
                const C3: $t = C1 + 1.0;
                1.0 + C3 * (self - 1.0).powi(3) + C1 * (self - 1.0).powi(2)
            }
            #[inline]
            fn ease_back_in_out(self) -> Self {
                const C2: $t = BACK_IN_OUT_OVERSHOOT as $t;
                if self < 0.5 {
                    (2.0 * self).powi(2) * ((C2 + 1.0) * 2.0 * self - C2) / 2.0
                } else {
                    ((2.0 * self - 2.0).powi(2) * ((C2 + 1.0) * (self * 2.0 - 2.0) + C2) + 2.0)
                        / 2.0
                }
            }

            // Elastic
            #[inline]
            fn ease_elastic_in(self) -> Self {
                const C4: $t = (2.0 * std::$t::consts::PI) / 3.0;
                if self.is_zero_approx() {
                    0.0
                } else if self.is_equal_approx(1.0) {
                    1.0
                } else {
                    -(2.0 as $t).powf(10.0 * self - 10.0) * ((self * 10.0 - 10.75) * C4).sin()
                }
            }
            #[inline]
            fn ease_elastic_out(self) -> Self {
                const C4: $t = (2.0 * std::$t::consts::PI) / 3.0;
                if self.is_zero_approx() {
                    0.0
                } else if self.is_equal_approx(1.0) {
                    1.0
                } else {
                    (2.0 as $t).powf(-10.0 * self) * ((self * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
            #[inline]
            fn ease_elastic_in_out(self) -> Self {
                const C5: $t = ELASTIC_IN_OUT_PERIOD as $t;
                if self.is_zero_approx() {
                    0.0
                } else if self.is_equal_approx(1.0) {
                    1.0
                } else if self < 0.5 {
                    -((2.0 as $t).powf(20.0 * self - 10.0) * ((20.0 * self - 11.125) * C5).sin())
                        / 2.0
                } else {
                    ((2.0 as $t).powf(-20.0 * self + 10.0) * ((20.0 * self - 11.125) * C5).sin())
                        / 2.0
                        + 1.0
                }
            }
        }
    };
}

impl_curve!(f32);
impl_curve!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn polynomial_midpoints() {
        assert_eq!(0.5_f64.ease_quadratic_in(), 0.25);
        assert_eq!(0.5_f64.ease_quadratic_out(), 0.75);
        assert_eq!(0.5_f32.ease_cubic_in(), 0.125);
        assert_eq!(0.25_f64.ease_cubic_in_out(), 0.0625);
        assert_eq!(0.5_f64.ease_quartic_in(), 0.0625);
        assert_eq!(0.5_f64.ease_quintic_in(), 0.03125);
    }

    #[test]
    fn sine_in_reaches_one() {
        assert!((1.0_f64.ease_sine_in() - 1.0).abs() < EPS);
        assert!((1.0_f32.ease_sine_in() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn exponential_snaps_near_edges() {
        assert_eq!(1e-7_f64.ease_exponential_in(), 0.0);
        assert_eq!((1.0_f64 - 1e-7).ease_exponential_out(), 1.0);
        assert_eq!(1e-7_f32.ease_exponential_in_out(), 0.0);
        assert_eq!((1.0_f32 - 1e-7).ease_exponential_in_out(), 1.0);
    }

    #[test]
    fn exponential_in_does_not_snap_at_one() {
        // Only the zero edge is checked for the In variant; 2^0 is exact anyway.
        assert_eq!(1.0_f64.ease_exponential_in(), 1.0);
        // Just outside the band the formula applies.
        let y = 1e-5_f64.ease_exponential_in();
        assert!(y > 0.0 && y < 0.001);
    }

    #[test]
    fn elastic_snaps_near_edges() {
        assert_eq!((1.0_f64 - 1e-7).ease_elastic_out(), 1.0);
        assert_eq!((1.0_f32 - 1e-7).ease_elastic_out(), 1.0);
        assert_eq!(5e-7_f64.ease_elastic_in(), 0.0);
        assert_eq!(1e-7_f64.ease_elastic_in_out(), 0.0);
    }

    #[test]
    fn back_constants_match_in_out_split() {
        // Both InOut branches meet at 0.5.
        let left = {
            let x = 0.5_f64;
            (2.0 * x).powi(2) * ((BACK_IN_OUT_OVERSHOOT + 1.0) * 2.0 * x - BACK_IN_OUT_OVERSHOOT)
                / 2.0
        };
        assert!((left - 0.5).abs() < EPS);
        assert!((0.5_f64.ease_back_in_out() - 0.5).abs() < EPS);
    }

    #[test]
    fn back_pulls_back_and_overshoots() {
        assert!(0.2_f64.ease_back_in() < 0.0);
        assert!(0.7_f64.ease_back_out() > 1.0);
    }

    #[test]
    fn extrapolates_outside_unit_range() {
        assert_eq!(2.0_f64.ease_quadratic_in(), 4.0);
        assert_eq!((-1.0_f64).ease_cubic_in(), -1.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(f64::NAN.ease_sine_in().is_nan());
        assert!(f32::NAN.ease_quadratic_in_out().is_nan());
        assert!(f64::NAN.ease_elastic_out().is_nan());
    }
}
