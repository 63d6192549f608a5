//! Sphere primitive for ray tracing.

use crate::{hittable::Intersection, Material, Ray};
use lumen_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect the ray with the near side of the sphere.
    ///
    /// Only the smaller root of the quadratic is tested, so a ray starting
    /// inside the sphere reports no hit.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        if self.radius <= 0.0 {
            return None;
        }

        let p = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        if a <= 0.0 {
            return None;
        }
        let b = 2.0 * p.dot(ray.direction());
        let c = p.dot(p) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t < 0.0 {
            return None;
        }

        let point = ray.at(t);
        Some(Intersection {
            t,
            point,
            normal: (point - self.center).normalize_or_zero(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey_sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::diffuse(Vec3::splat(0.5)))
    }

    #[test]
    fn test_sphere_hit_straight_on() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, 10.0), 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = sphere.intersect(&ray).expect("ray aims at the sphere");
        assert!((hit.t - 8.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, 8.0)).length() < 1e-5);
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_distance_from_any_outside_origin() {
        let center = Vec3::new(1.0, -2.0, 3.0);
        let sphere = grey_sphere(center, 1.5);

        for origin in [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(-4.0, 7.0, 2.0),
            Vec3::new(1.0, -2.0, -20.0),
        ] {
            let ray = Ray::new(origin, center - origin);
            let hit = sphere.intersect(&ray).expect("ray aims at the center");

            let expected = (center - origin).length() - 1.5;
            assert!((hit.t - expected).abs() < 1e-4, "t={} expected={}", hit.t, expected);
            let expected_normal = (hit.point - center).normalize();
            assert!((hit.normal - expected_normal).length() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_is_a_miss() {
        let sphere = grey_sphere(Vec3::ZERO, 3.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_degenerate_sphere_never_hits() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, 5.0), 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());

        let zero_dir = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(grey_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0).intersect(&zero_dir).is_none());
    }
}
