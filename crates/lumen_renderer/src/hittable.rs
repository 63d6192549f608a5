//! Intersection results shared by the primitives and the scene query.

use crate::Material;
use lumen_math::Vec3;

/// Where a ray meets a single primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the (unit) ray direction
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal. Spheres face outward; triangles follow winding.
    pub normal: Vec3,
}

/// Record of the nearest ray-scene intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    pub fn new(hit: Intersection, material: &'a Material) -> Self {
        Self {
            t: hit.t,
            p: hit.point,
            normal: hit.normal,
            material,
        }
    }
}
