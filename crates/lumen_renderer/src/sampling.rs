//! Random sampling helpers used by the camera and the integrator.

use lumen_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Upper bound on hemisphere rejection rounds before falling back to the normal.
pub const MAX_HEMISPHERE_ATTEMPTS: u32 = 64;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Uniformly distributed point on the unit sphere, from spherical coordinates.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    let theta = gen_f32(rng) * 2.0 * PI;
    let phi = (2.0 * gen_f32(rng) - 1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}

/// Unit vector in the hemisphere around `normal`.
///
/// Full-sphere samples are drawn until one has a non-negative dot product
/// with the normal. After [`MAX_HEMISPHERE_ATTEMPTS`] failures (only
/// plausible for a zero or NaN normal) the normal itself is returned.
pub fn random_in_hemisphere(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_HEMISPHERE_ATTEMPTS {
        let candidate = random_unit_vector(rng);
        if candidate.dot(normal) >= 0.0 {
            return candidate.normalize_or_zero();
        }
    }
    normal
}
