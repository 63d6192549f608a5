//! Surface material: albedo, emission and a specular-to-diffuse blend.

use lumen_math::Vec3;

/// Color type alias (linear RGB, nominally 0-1)
pub type Color = Vec3;

/// How a surface reflects and emits light.
///
/// Component ranges are not validated. Values outside [0, 1] are accepted
/// and simply produce implausible images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Albedo multiplied into the throughput of a bounced ray
    pub color: Color,
    /// Color of emitted light
    pub emit_color: Color,
    /// Scale applied to `emit_color`
    pub strength: f32,
    /// 0 = perfect mirror, 1 = fully diffuse
    pub smoothness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}

impl Material {
    /// Create a material from all of its parameters.
    pub fn new(color: Color, emit_color: Color, strength: f32, smoothness: f32) -> Self {
        Self {
            color,
            emit_color,
            strength,
            smoothness,
        }
    }

    /// Non-emissive surface scattering uniformly over the hemisphere.
    pub fn diffuse(color: Color) -> Self {
        Self::new(color, Color::ZERO, 0.0, 1.0)
    }

    /// Non-emissive perfect mirror tinted by `color`.
    pub fn mirror(color: Color) -> Self {
        Self::new(color, Color::ZERO, 0.0, 0.0)
    }

    /// Black emitter. Rays stop carrying throughput after hitting it.
    pub fn light(emit_color: Color, strength: f32) -> Self {
        Self::new(Color::ZERO, emit_color, strength, 1.0)
    }

    /// Create a diffuse material from 8-bit channel values.
    pub fn from_rgb8(color: [u8; 3], emit_color: [u8; 3], strength: f32) -> Self {
        Self::new(rgb8_to_color(color), rgb8_to_color(emit_color), strength, 1.0)
    }

    /// Set the specular-to-diffuse blend.
    pub fn with_smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = smoothness;
        self
    }

    /// Radiance leaving the surface on its own.
    #[inline]
    pub fn emitted(&self) -> Color {
        self.emit_color * self.strength
    }

    /// Check if this material emits any light.
    pub fn is_emissive(&self) -> bool {
        self.emitted().max_element() > 0.0
    }
}

fn rgb8_to_color(rgb: [u8; 3]) -> Color {
    Color::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0
}
