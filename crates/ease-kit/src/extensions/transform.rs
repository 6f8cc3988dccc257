// extensions/transform.rs
//
// Orientation helpers for 3D affine transforms.
//
// Usage:
//   let turned = transform.set_forward(5.0 * dt, velocity, None);
//   let halfway = a.interpolate_with(b, 0.5);

use glam::{Affine3A, Mat3, Vec3};

/// Interpolation and re-orientation of a 3D transform.
pub trait TransformExt: Sized {
    /// Blend towards `target`: scale and translation are lerped, rotation is
    /// slerped. `weight` is not clamped.
    fn interpolate_with(self, target: Self, weight: f32) -> Self;

    /// Turn towards a basis whose Z axis is `forward` and whose Y axis is
    /// `up` (default [`Vec3::Y`]), keeping the translation.
    ///
    /// `weight` = 1 snaps to the new orientation, smaller values turn part
    /// of the way. A degenerate basis (zero `forward`, or `forward` parallel
    /// to `up`) leaves the transform unchanged.
    fn set_forward(self, weight: f32, forward: Vec3, up: Option<Vec3>) -> Self;
}

impl TransformExt for Affine3A {
    fn interpolate_with(self, target: Self, weight: f32) -> Self {
        let (from_scale, from_rot, from_pos) = self.to_scale_rotation_translation();
        let (to_scale, to_rot, to_pos) = target.to_scale_rotation_translation();
        Affine3A::from_scale_rotation_translation(
            from_scale.lerp(to_scale, weight),
            from_rot.slerp(to_rot, weight),
            from_pos.lerp(to_pos, weight),
        )
    }

    fn set_forward(self, weight: f32, forward: Vec3, up: Option<Vec3>) -> Self {
        let up = up.unwrap_or(Vec3::Y);
        let Some(basis) = orthonormalized(up.cross(forward), up, forward) else {
            log::warn!("set_forward: degenerate basis (forward {forward}, up {up}); transform unchanged");
            return self;
        };
        let target = Affine3A::from_mat3_translation(basis, self.translation.into());
        self.interpolate_with(target, weight)
    }
}

/// Gram-Schmidt in X, Y, Z order. `None` if any axis collapses.
fn orthonormalized(x: Vec3, y: Vec3, z: Vec3) -> Option<Mat3> {
    let x = x.try_normalize()?;
    let y = (y - x * x.dot(y)).try_normalize()?;
    let z = (z - x * x.dot(z) - y * y.dot(z)).try_normalize()?;
    Some(Mat3::from_cols(x, y, z))
}
