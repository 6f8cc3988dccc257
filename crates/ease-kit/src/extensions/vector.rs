// extensions/vector.rs
//
// Ground-plane helpers for Y-up 3D vectors. The XZ plane is the floor;
// Y passes through untouched.

use glam::{Vec2, Vec3};

use super::interp::Lerp;

/// XZ-plane operations on a 3D vector.
pub trait PlanarExt {
    /// Project onto the ground plane: `(x, z)`.
    fn xz_as_vec2(self) -> Vec2;

    /// `x² + z²`.
    fn xz_length_squared(self) -> f32;

    /// Length of the ground-plane projection.
    fn xz_length(self) -> f32;

    /// Scale X and Z by `amount`, keep Y.
    fn xz_scale(self, amount: f32) -> Self;

    /// Interpolate X and Z towards `other`, keep this vector's Y.
    fn xz_lerp(self, other: Self, weight: f32) -> Self;
}

impl PlanarExt for Vec3 {
    #[inline]
    fn xz_as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    #[inline]
    fn xz_length_squared(self) -> f32 {
        self.x * self.x + self.z * self.z
    }

    #[inline]
    fn xz_length(self) -> f32 {
        self.xz_length_squared().sqrt()
    }

    #[inline]
    fn xz_scale(self, amount: f32) -> Self {
        Vec3::new(self.x * amount, self.y, self.z * amount)
    }

    #[inline]
    fn xz_lerp(self, other: Self, weight: f32) -> Self {
        Vec3::new(
            Lerp::lerp(self.x, other.x, weight),
            self.y,
            Lerp::lerp(self.z, other.z, weight),
        )
    }
}
