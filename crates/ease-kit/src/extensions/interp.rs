// extensions/interp.rs
//
// Linear interpolation, plain and eased.

use super::curves::Curve;
use super::easing::Easing;

/// Linear interpolation towards another value of the same type.
pub trait Lerp<W = f32>: Sized {
    /// `self + (to - self) * weight`. The weight is not clamped.
    fn lerp(self, to: Self, weight: W) -> Self;
}

impl Lerp<f32> for f32 {
    #[inline]
    fn lerp(self, to: Self, weight: f32) -> Self {
        self + (to - self) * weight
    }
}

impl Lerp<f64> for f64 {
    #[inline]
    fn lerp(self, to: Self, weight: f64) -> Self {
        self + (to - self) * weight
    }
}

#[cfg(feature = "vectors")]
impl Lerp<f32> for glam::Vec2 {
    #[inline]
    fn lerp(self, to: Self, weight: f32) -> Self {
        self + (to - self) * weight
    }
}

#[cfg(feature = "vectors")]
impl Lerp<f32> for glam::Vec3 {
    #[inline]
    fn lerp(self, to: Self, weight: f32) -> Self {
        self + (to - self) * weight
    }
}

/// Interpolate from `from` to `to`, shaping progress `t` with `easing`.
#[inline]
pub fn ease_between<T, W>(from: T, to: T, t: W, easing: Easing) -> T
where
    T: Lerp<W>,
    W: Curve,
{
    from.lerp(to, easing.apply(t))
}
