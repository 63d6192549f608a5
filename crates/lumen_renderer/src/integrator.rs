//! Path tracing integrator.
//!
//! Follows a single camera ray through at most `max_bounces` surface
//! interactions. At each hit the outgoing direction is a blend of the mirror
//! reflection and a random hemisphere direction, weighted by the material's
//! smoothness. Emission picked up along the way is scaled by the throughput
//! carried so far.

use crate::sampling::random_in_hemisphere;
use crate::{Color, Ray, Scene};
use lumen_math::{reflect, Interval};
use rand::RngCore;

/// Minimum hit distance for bounced rays, so a ray leaving a surface does
/// not immediately re-hit that same surface.
pub const SELF_HIT_EPSILON: f32 = 1e-4;

/// Bounce limit used when nothing else is configured.
pub const DEFAULT_MAX_BOUNCES: u32 = 3;

/// Result of tracing one camera ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Radiance estimate carried back to the camera
    pub radiance: Color,
    /// Number of surface hits processed, never more than the bounce limit
    pub bounces: u32,
}

/// Trace one ray through the scene and return its radiance estimate.
///
/// A ray that escapes contributes black. The diffuse cosine term comes from
/// the accepted hemisphere sample and throughput is doubled per bounce to
/// roughly offset the average cosine; this is a heuristic, not an unbiased
/// estimator.
pub fn trace(ray: Ray, scene: &Scene, max_bounces: u32, rng: &mut dyn RngCore) -> PathSample {
    let mut ray = ray;
    let mut light = Color::ZERO;
    let mut throughput = Color::ONE;
    let mut bounces = 0;

    let ray_t = Interval::new(SELF_HIT_EPSILON, f32::INFINITY);

    while bounces < max_bounces {
        let Some(rec) = scene.nearest_hit_in(&ray, ray_t) else {
            break;
        };
        bounces += 1;

        let material = rec.material;
        let specular = reflect(ray.direction(), rec.normal).normalize_or_zero();
        let diffuse = random_in_hemisphere(rec.normal, rng);
        let light_strength = rec.normal.dot(diffuse);

        let mut direction = specular.lerp(diffuse, material.smoothness);
        if direction.length_squared() < 1e-12 {
            // Mirror and diffuse cancelled out
            direction = diffuse;
        }
        ray = Ray::new(rec.p, direction);

        light += material.emitted() * throughput;
        throughput *= material.color;
        throughput *= light_strength * 2.0;
    }

    PathSample {
        radiance: light,
        bounces,
    }
}
