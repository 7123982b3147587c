//! Vector helpers shared by the camera and the materials.
//!
//! Everything here is a pure function of its inputs.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// `v` must have non-zero length. A zero vector is a caller contract violation:
/// the result is NaN in every component, which propagates instead of panicking.
/// Use [`try_unit_vector`] where the input is not already known to be non-degenerate.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Checked form of [`unit_vector`]. Returns `None` for zero-length or non-finite input.
pub fn try_unit_vector(v: Vec3) -> Option<Vec3> {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        Some(v / length)
    } else {
        None
    }
}

/// Mirror `v` about the surface normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Bend `v` through a surface with normal `n` by Snell's law.
///
/// `n` faces against the incoming side and `ratio` is eta_incident / eta_transmitted.
/// Returns `None` when the discriminant is not positive (total internal reflection).
pub fn refract(v: Vec3, n: Vec3, ratio: f64) -> Option<Vec3> {
    let uv = unit_vector(v);
    let dt = uv.dot(n);
    let discriminant = 1.0 - ratio * ratio * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some((uv - n * dt) * ratio - n * discriminant.sqrt())
    } else {
        None
    }
}

/// True if every component is within 1e-8 of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    const EPS: f64 = 1.0e-8;
    v.x.abs() < EPS && v.y.abs() < EPS && v.z.abs() < EPS
}
