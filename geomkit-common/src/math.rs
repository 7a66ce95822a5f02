//! Vector helpers used by the generators
//!
//! Thin wrappers over `glam` so that the normal computations read the same
//! way everywhere they are used.

use glam::Vec3;

/// Cross product of two vectors.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Normalize a vector, leaving zero-length vectors at zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Unit normal of the triangle `(p0, p1, p2)`.
///
/// Computed as `normalize((p1 - p0) × (p2 - p1))`, so counter-clockwise
/// triangles seen from +Y face +Y. Degenerate triangles yield zero.
#[inline]
pub fn triangle_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    normalize(cross(p1 - p0, p2 - p1))
}
