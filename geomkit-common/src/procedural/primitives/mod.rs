//! Vertex generators for every primitive
//!
//! Each generator is a pure function of its parameters. Parameters are
//! validated up front; an `Err` means no vertices were produced.

mod fan;
mod fixed;
mod grid;
mod sphere_torus;

use crate::error::GenerateError;

// Re-export all public functions
pub use fan::{cone_vertices, cylinder_vertices, disk_vertices, fan_cone_vertices};
pub use fixed::{
    CUBE, QUAD, TEAPOT_VERTICES_PER_SLICE, cube_vertices, quad_vertices, teapot_vertices,
};
pub use grid::grid2d_vertices;
pub use sphere_torus::{sphere_vertices, torus_vertices};

/// Reject a zero subdivision count
pub(crate) fn require_subdivision(
    shape: &'static str,
    param: &'static str,
    value: u32,
) -> Result<(), GenerateError> {
    if value == 0 {
        return Err(GenerateError::ZeroSubdivision { shape, param });
    }
    Ok(())
}

/// Total vertex count of a shape, rejected when `count` overflowed
///
/// Draw ranges and indices are `u32`, so every vertex must be addressable
/// by one.
pub(crate) fn vertex_count(
    shape: &'static str,
    count: Option<u32>,
) -> Result<usize, GenerateError> {
    count
        .map(|n| n as usize)
        .ok_or(GenerateError::TooLarge { shape })
}

/// Reject grids with fewer than two vertices along either axis
pub(crate) fn require_grid(width: u32, height: u32) -> Result<(), GenerateError> {
    if width < 2 || height < 2 {
        return Err(GenerateError::GridTooSmall { width, height });
    }
    Ok(())
}
