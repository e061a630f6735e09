use bevy_math::{Quat, Vec2, Vec3};

// Basis: standard RHS with +Z forward, +X right, +Y up
pub(super) const BODY_FWD: Vec3 = Vec3::Z;
pub(super) const BODY_RIGHT: Vec3 = Vec3::X;

/// Wrap an angle in degrees into (−180, 180].
#[inline]
pub(super) fn wrap_angle_deg(a: f32) -> f32 {
    let mut a = a % 360.0;
    if a > 180.0 {
        a -= 360.0;
    }
    if a <= -180.0 {
        a += 360.0;
    }
    a
}

/// Roll angle in degrees extracted from a body→world quaternion. The
/// clamp is mandatory: floating-point drift can push the operand an
/// epsilon past ±1 and `asin` would return NaN.
#[inline]
pub(super) fn heel_angle_deg(q: Quat) -> f32 {
    let s = (2.0 * (q.w * q.z - q.x * q.y)).clamp(-1.0, 1.0);
    s.asin().to_degrees()
}

/// Project a world vector onto the XZ plane and normalize, substituting
/// `fallback` when the projection is degenerate (e.g. forward pointing
/// straight up during a capsize).
#[inline]
pub(super) fn flat_axis_or(v: Vec3, fallback: Vec2) -> Vec2 {
    let flat = Vec2::new(v.x, v.z);
    let len2 = flat.length_squared();
    if len2 > 1e-8 {
        flat / len2.sqrt()
    } else {
        fallback
    }
}

#[inline]
pub(super) fn lift_xz(v: Vec2) -> Vec3 {
    Vec3::new(v.x, 0.0, v.y)
}
