//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{hittable::Intersection, Material, Ray};
use lumen_math::Vec3;

/// Determinant and distance threshold for Möller-Trumbore.
pub const TRIANGLE_EPSILON: f32 = 1e-6;

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal, `(v1 - v0) x (v2 - v0)` normalized.
    /// Zero for degenerate triangles.
    normal: Vec3,
    material: Material,
}

/// Raw Möller-Trumbore solution: barycentrics and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Barycentric {
    pub u: f32,
    pub v: f32,
    pub t: f32,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding order and is never flipped toward the
    /// incoming ray, so wind walls to face the interior you want lit.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Möller-Trumbore ray-triangle intersection.
    pub(crate) fn solve(&self, ray: &Ray) -> Option<Barycentric> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let det = edge1.dot(h);

        // Ray is parallel to triangle (or the triangle is degenerate)
        if det.abs() < TRIANGLE_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin() - self.v0;
        let u = s.dot(h) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = ray.direction().dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        if t <= TRIANGLE_EPSILON {
            return None;
        }

        Some(Barycentric { u, v, t })
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let Barycentric { t, .. } = self.solve(ray)?;

        Some(Intersection {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }
}
