//! Random sampling helpers.
//!
//! Every function draws from the caller's generator so a seeded source gives
//! reproducible renders.

use lumen_math::Vec3;
use rand::{Rng, RngCore};

/// Upper bound on rejection-sampling attempts before falling back to the origin.
///
/// Each attempt succeeds with probability above 0.5, so a real generator never gets
/// close. The cap only matters for broken or adversarial sources.
pub const MAX_REJECTION_ATTEMPTS: usize = 1000;

/// Uniform f64 in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// Uniform point strictly inside the unit sphere.
///
/// Returns the zero vector if [`MAX_REJECTION_ATTEMPTS`] candidates were all rejected.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = 2.0 * Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3::ZERO
}

/// Uniform point strictly inside the unit disk in the z = 0 plane.
///
/// Returns the zero vector if [`MAX_REJECTION_ATTEMPTS`] candidates were all rejected.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3::new(2.0 * gen_f64(rng) - 1.0, 2.0 * gen_f64(rng) - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3::ZERO
}
