//! Closed set of scene primitives.

use crate::{hittable::Intersection, Material, Ray, Sphere, Triangle};

/// Any object that can sit in a [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    #[inline]
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Triangle(triangle) => triangle.material(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
