//! Literal-data primitives (quad, cube, teapot)

use std::f64::consts::TAU;

use super::{require_subdivision, vertex_count};
use crate::error::GenerateError;
use crate::procedural::types::MeshVertex;

const fn v(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> MeshVertex {
    MeshVertex::new(position, normal, uv)
}

/// Unit quad in the XY plane facing +Z, drawn as a 4-vertex strip
pub const QUAD: [MeshVertex; 4] = [
    v([-1.0, -1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.0, -1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([-1.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([1.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
];

/// Cube spanning `[-1, 1]³`, six faces of four strip vertices each
///
/// Face order: front (+Z), back (-Z), right (+X), left (-X), top (+Y),
/// bottom (-Y).
pub const CUBE: [MeshVertex; 24] = [
    // Front
    v([-1.0, -1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([1.0, -1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([-1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
    // Back
    v([1.0, -1.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([-1.0, -1.0, -1.0], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([1.0, 1.0, -1.0], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([-1.0, 1.0, -1.0], [0.0, 0.0, -1.0], [1.0, 1.0]),
    // Right
    v([1.0, -1.0, 1.0], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([1.0, -1.0, -1.0], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([1.0, 1.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([1.0, 1.0, -1.0], [1.0, 0.0, 0.0], [1.0, 1.0]),
    // Left
    v([-1.0, -1.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-1.0, -1.0, 1.0], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-1.0, 1.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-1.0, 1.0, 1.0], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    // Top
    v([-1.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([1.0, 1.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-1.0, 1.0, -1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([1.0, 1.0, -1.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    // Bottom
    v([-1.0, -1.0, -1.0], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([1.0, -1.0, -1.0], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-1.0, -1.0, 1.0], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.0, -1.0, 1.0], [0.0, -1.0, 0.0], [1.0, 1.0]),
];

/// Teapot silhouette, lid apex to bottom centre: `(x, y, nx, ny, v)`
///
/// Revolving `(x, y)` around Y gives the surface; `(nx, ny)` revolves the
/// same way into the normal and `v` is the texture row.
const TEAPOT_PROFILE: [[f32; 5]; 26] = [
    // Lid
    [0.000, 0.394, 0.000, 1.000, 0.000000],
    [0.085, 0.382, 0.825, 0.565, 0.055058],
    [0.081, 0.352, 0.940, -0.335, 0.074406],
    [0.049, 0.315, 0.960, -0.285, 0.105557],
    [0.050, 0.281, 0.845, 0.530, 0.126978],
    [0.114, 0.259, 0.260, 0.965, 0.170294],
    [0.206, 0.244, 0.180, 0.985, 0.230067],
    [0.289, 0.229, 0.380, 0.925, 0.283858],
    [0.325, 0.206, 0.170, 0.985, 0.310912],
    // Rim
    [0.350, 0.206, -0.970, -0.255, 0.310912],
    [0.345, 0.225, -0.970, 0.255, 0.323163],
    [0.351, 0.231, -0.090, 1.000, 0.328592],
    [0.362, 0.225, 0.680, 0.730, 0.336960],
    // Body
    [0.489, -0.081, 0.870, 0.495, 0.351323],
    [0.421, 0.108, 0.915, 0.405, 0.420675],
    [0.461, 0.012, 0.940, 0.335, 0.487306],
    [0.489, -0.081, 0.980, 0.205, 0.549441],
    [0.500, -0.169, 1.000, -0.065, 0.605798],
    [0.481, -0.243, 0.900, -0.435, 0.654719],
    [0.438, -0.298, 0.730, -0.685, 0.699350],
    [0.395, -0.335, 0.695, -0.720, 0.735718],
    // Bottom
    [0.375, -0.356, 0.795, -0.610, 0.754156],
    [0.367, -0.370, 0.625, -0.780, 0.764490],
    [0.321, -0.382, 0.175, -0.985, 0.794571],
    [0.209, -0.391, 0.050, -1.000, 0.866376],
    [0.000, -0.394, 0.000, -1.000, 1.000000],
];

const LID_APEX: usize = 0;
const BOTTOM_CENTRE: usize = 25;

/// Vertices emitted per revolution step: 24 profile points at two angles
/// plus one closing pole vertex
pub const TEAPOT_VERTICES_PER_SLICE: usize = 49;

/// Quad vertices (4)
pub fn quad_vertices() -> Vec<MeshVertex> {
    QUAD.to_vec()
}

/// Cube vertices (24)
pub fn cube_vertices() -> Vec<MeshVertex> {
    CUBE.to_vec()
}

/// Generate the teapot by revolving its profile `slices` times around Y
///
/// # Returns
/// `49 * slices + 1` vertices forming a single triangle strip. The strip
/// starts at the lid apex. Even steps walk the profile down and close on the
/// bottom centre; odd steps walk it back up and close on the lid apex, which
/// keeps the strip continuous and its winding consistent.
pub fn teapot_vertices(slices: u32) -> Result<Vec<MeshVertex>, GenerateError> {
    require_subdivision("teapot", "slices", slices)?;
    let count = vertex_count(
        "teapot",
        slices
            .checked_mul(TEAPOT_VERTICES_PER_SLICE as u32)
            .and_then(|n| n.checked_add(1)),
    )?;

    let step = TAU / slices as f64;
    let mut vertices = Vec::with_capacity(count);
    vertices.push(pole_vertex(LID_APEX, 0.0));

    for i in 0..slices {
        let angle = i as f64 * step;
        let mut sweep: [usize; 24] = std::array::from_fn(|k| k + 1);
        let pole = if i % 2 == 0 {
            BOTTOM_CENTRE
        } else {
            sweep.reverse();
            LID_APEX
        };

        for entry in sweep {
            vertices.push(revolved_vertex(entry, angle));
            vertices.push(revolved_vertex(entry, angle + step));
        }
        vertices.push(pole_vertex(pole, angle / TAU));
    }

    Ok(vertices)
}

/// Profile entry `entry` rotated by `angle` around Y
fn revolved_vertex(entry: usize, angle: f64) -> MeshVertex {
    let [x, y, nx, ny, tv] = TEAPOT_PROFILE[entry].map(f64::from);
    let (sin, cos) = angle.sin_cos();
    MeshVertex::from_f64(
        [x * cos, y, x * sin],
        [nx * cos, ny, nx * sin],
        [angle / TAU, tv],
    )
}

/// Profile entry `entry` unrotated, with texture column `u`
fn pole_vertex(entry: usize, u: f64) -> MeshVertex {
    let [x, y, nx, ny, tv] = TEAPOT_PROFILE[entry];
    MeshVertex::new([x, y, 0.0], [nx, ny, 0.0], [u as f32, tv])
}
