//! Scene container and the nearest-hit query.
//!
//! Primitives are scanned linearly in insertion order. Scenes are small
//! enough that an acceleration structure would not pay for itself.

use crate::{HitRecord, Primitive, Ray};
use lumen_math::Interval;

/// An insertion-ordered list of primitives.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
        }
    }

    /// Add a primitive to the end of the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Builder-style [`Scene::add`].
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.add(primitive);
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest hit at any non-negative distance.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.nearest_hit_in(ray, Interval::FORWARD)
    }

    /// Nearest hit whose distance lies in `ray_t`.
    ///
    /// Comparison is strict, so on an exact distance tie the primitive added
    /// first wins.
    pub fn nearest_hit_in(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut nearest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for primitive in &self.primitives {
            let Some(hit) = primitive.intersect(ray) else {
                continue;
            };
            if ray_t.contains(hit.t) && hit.t < closest_so_far {
                closest_so_far = hit.t;
                nearest = Some(HitRecord::new(hit, primitive.material()));
            }
        }

        nearest
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Material, Sphere, Triangle};
    use lumen_math::Vec3;

    fn sphere(z: f32, radius: f32, color: Color) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), radius, Material::diffuse(color))
    }

    #[test]
    fn test_empty_scene_never_hits() {
        let scene = Scene::new();
        assert!(scene.is_empty());

        for direction in [Vec3::X, -Vec3::Y, Vec3::new(1.0, 2.0, 3.0)] {
            let ray = Ray::new(Vec3::new(0.3, -2.0, 7.0), direction);
            assert!(scene.nearest_hit(&ray).is_none());
        }
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let near = sphere(5.0, 1.0, Color::X);
        let far = sphere(6.0, 3.0, Color::Y);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        // far sphere's surface is at z=3, near sphere's at z=4: far is closer
        let forward = Scene::new().with(near.clone()).with(far.clone());
        let backward = Scene::new().with(far).with(near);

        for scene in [forward, backward] {
            let hit = scene.nearest_hit(&ray).expect("both spheres are in front");
            assert!((hit.t - 3.0).abs() < 1e-5);
            assert_eq!(hit.material.color, Color::Y);
        }
    }

    #[test]
    fn test_exact_tie_keeps_first_inserted() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let scene = Scene::new()
            .with(sphere(10.0, 2.0, Color::X))
            .with(sphere(10.0, 2.0, Color::Y));
        assert_eq!(scene.nearest_hit(&ray).unwrap().material.color, Color::X);

        let scene = Scene::new()
            .with(sphere(10.0, 2.0, Color::Y))
            .with(sphere(10.0, 2.0, Color::X));
        assert_eq!(scene.nearest_hit(&ray).unwrap().material.color, Color::Y);
    }

    #[test]
    fn test_mixed_primitives() {
        let wall = Triangle::new(
            Vec3::new(-10.0, -10.0, 4.0),
            Vec3::new(10.0, -10.0, 4.0),
            Vec3::new(0.0, 10.0, 4.0),
            Material::diffuse(Color::Z),
        );
        let scene = Scene::new().with(sphere(10.0, 2.0, Color::X)).with(wall);
        assert_eq!(scene.len(), 2);

        let hit = scene.nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.material.color, Color::Z);
    }

    #[test]
    fn test_interval_excludes_close_hits() {
        let scene = Scene::new().with(sphere(10.0, 2.0, Color::X));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(scene.nearest_hit_in(&ray, Interval::new(0.0, 5.0)).is_none());
        assert!(scene.nearest_hit_in(&ray, Interval::new(9.0, f32::INFINITY)).is_none());
        assert!(scene.nearest_hit_in(&ray, Interval::new(7.0, 9.0)).is_some());
    }
}
