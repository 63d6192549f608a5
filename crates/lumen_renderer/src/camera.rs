//! Pinhole camera for ray generation.

use crate::sampling::{gen_f32, gen_range};
use crate::Ray;
use lumen_math::Vec3;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Per-sample perturbation of camera rays.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jitter {
    /// Always shoot through the pixel centre
    None,
    /// Uniform offset inside the pixel footprint
    #[default]
    Pixel,
    /// Random angular offset within a cone of the given full angle (degrees)
    Cone { degrees: f32 },
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Image settings
    image_width: u32,
    image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    vfov: f32, // Vertical field of view in degrees

    // Cached computed values (set by initialize())
    half_width: f32,
    half_height: f32,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a new camera at the origin looking down +Z.
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 600,
            image_height: 600,
            look_from: Vec3::ZERO,
            look_at: Vec3::Z,
            vup: Vec3::Y,
            vfov: 60.0,
            half_width: 0.0,
            half_height: 0.0,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.initialize();
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.initialize();
        self
    }

    /// Set vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.initialize();
        self
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn position(&self) -> Vec3 {
        self.look_from
    }

    pub fn vfov(&self) -> f32 {
        self.vfov
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vec3 {
        self.w
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.image_width as usize * self.image_height as usize
    }

    /// Recompute the basis and viewport extents. Every `with_*` builder calls this.
    fn initialize(&mut self) {
        let aspect = if self.image_height > 0 {
            self.image_width as f32 / self.image_height as f32
        } else {
            1.0
        };

        self.half_height = (self.vfov.to_radians() / 2.0).tan();
        self.half_width = self.half_height * aspect;

        // w forward, u right, v up
        self.w = (self.look_at - self.look_from).normalize_or_zero();
        self.u = self.w.cross(self.vup).normalize_or_zero();
        self.v = self.u.cross(self.w);
    }

    /// Generate a ray for pixel (i, j), counted from the top-left corner.
    pub fn get_ray(&self, i: u32, j: u32, jitter: Jitter, rng: &mut dyn RngCore) -> Ray {
        let (dx, dy) = match jitter {
            Jitter::Pixel => (gen_f32(rng), gen_f32(rng)),
            Jitter::None | Jitter::Cone { .. } => (0.5, 0.5),
        };

        // Screen coordinates in [-1, 1], +y up
        let sx = ((i as f32 + dx) / self.image_width as f32) * 2.0 - 1.0;
        let sy = 1.0 - ((j as f32 + dy) / self.image_height as f32) * 2.0;

        let mut direction = self.w + sx * self.half_width * self.u + sy * self.half_height * self.v;

        if let Jitter::Cone { degrees } = jitter {
            let spread = (degrees.to_radians() / 2.0).tan() * direction.length();
            direction += gen_range(rng, -spread, spread) * self.u
                + gen_range(rng, -spread, spread) * self.v;
        }

        Ray::new(self.look_from, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new()
            .with_resolution(800, 600)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

        assert!((camera.w - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((camera.v - Vec3::Y).length() < 1e-6);
        assert!((camera.u - Vec3::X).length() < 1e-6);
        assert!((camera.u.cross(camera.v) + camera.w).length() < 1e-6);
    }

    #[test]
    fn test_centre_ray_points_forward() {
        let camera = Camera::new()
            .with_resolution(101, 51)
            .with_position(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 10.0), Vec3::Y);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(50, 25, Jitter::None, &mut rng);
        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert!((ray.direction() - Vec3::Z).length() < 1e-6);
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_corner_rays_follow_fov_and_aspect() {
        let camera = Camera::new().with_resolution(200, 100).with_fov(90.0);
        let mut rng = StdRng::seed_from_u64(42);

        // Looking down +Z with +Y up, screen right is world -X
        let ray = camera.get_ray(0, 0, Jitter::None, &mut rng);
        let d = ray.direction() / ray.direction().z;
        assert!(d.y > 0.95 && d.y < 1.0, "y slope {}", d.y);
        assert!(d.x > 1.9 && d.x < 2.0, "x slope {}", d.x);

        let ray = camera.get_ray(199, 99, Jitter::None, &mut rng);
        let d = ray.direction() / ray.direction().z;
        assert!(d.y < -0.95);
        assert!(d.x < -1.9);
    }

    #[test]
    fn test_resolution_change_refreshes_aspect() {
        let mut rng = StdRng::seed_from_u64(42);
        let square = Camera::new().with_resolution(100, 100).with_fov(90.0);
        let wide = square.clone().with_resolution(300, 100);

        assert_eq!((wide.image_width(), wide.image_height()), (300, 100));
        assert_eq!(wide.pixel_count(), 30_000);

        let d = square.get_ray(0, 50, Jitter::None, &mut rng).direction();
        assert!(((d / d.z).x - 0.99).abs() < 1e-4);
        let d = wide.get_ray(0, 50, Jitter::None, &mut rng).direction();
        assert!(((d / d.z).x - 3.0 * (1.0 - 1.0 / 300.0)).abs() < 1e-4);
    }

    #[test]
    fn test_pixel_jitter_stays_in_footprint() {
        let camera = Camera::new().with_resolution(10, 10).with_fov(90.0);
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..200 {
            let ray = camera.get_ray(7, 2, Jitter::Pixel, &mut rng);
            let d = ray.direction() / ray.direction().z;
            // Pixel 7 spans screen x in [0.4, 0.6]; world x is mirrored
            assert!(d.x.abs() >= 0.4 - 1e-5 && d.x.abs() <= 0.6 + 1e-5, "x {}", d.x);
            assert!(d.y >= 0.4 - 1e-5 && d.y <= 0.6 + 1e-5, "y {}", d.y);
        }
    }

    #[test]
    fn test_cone_jitter_spreads_around_centre() {
        let camera = Camera::new().with_resolution(11, 11);
        let mut rng = StdRng::seed_from_u64(5);
        let centre = camera.get_ray(5, 5, Jitter::None, &mut rng).direction();

        let mut max_angle: f32 = 0.0;
        for _ in 0..200 {
            let ray = camera.get_ray(5, 5, Jitter::Cone { degrees: 10.0 }, &mut rng);
            max_angle = max_angle.max(ray.direction().angle_between(centre).to_degrees());
        }
        assert!(max_angle > 1.0);
        // Square spread of +-5 degrees per axis reaches just over 7 degrees on the diagonal
        assert!(max_angle < 7.5, "max angle {max_angle}");
    }
}
