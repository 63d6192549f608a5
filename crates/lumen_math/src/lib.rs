// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
pub use interval::Interval;

/// Reflect `v` about the surface normal `n`.
///
/// `n` is expected to be unit length; the result has the same length as `v`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
