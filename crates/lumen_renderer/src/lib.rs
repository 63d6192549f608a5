//! Lumen renderer - progressive CPU path tracing
//!
//! Traces camera rays through a small scene of spheres and triangles,
//! blending mirror and diffuse scattering per material, and averages one
//! sample per pixel per frame into an accumulation buffer so the image
//! refines the longer it runs.

mod accumulation;
mod camera;
mod error;
mod hittable;
mod material;
mod primitive;
mod ray;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub mod integrator;
pub mod sampling;

pub use accumulation::{AccumulationBuffer, Accumulator};
pub use camera::{Camera, Jitter};
pub use error::RenderError;
pub use hittable::{HitRecord, Intersection};
pub use integrator::{trace, PathSample};
pub use material::{Color, Material};
pub use primitive::Primitive;
pub use ray::Ray;
pub use renderer::{color_to_rgb8, RenderContext, RenderSettings, BYTES_PER_PIXEL};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Vec3};
