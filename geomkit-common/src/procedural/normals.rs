//! Grid normal reconstruction
//!
//! Averages face normals around every vertex of a `width × height` position
//! grid. The triangulation is the one the grid topologies draw: each cell
//! `(x, z)` is split along the diagonal from `(x + 1, z)` to `(x, z + 1)`.
//! That gives interior vertices six incident faces, border vertices three,
//! the top-right and bottom-left corners two and the other two corners one.
//!
//! Faces are always listed with the centre vertex first and the neighbours in
//! a fixed rotation; changing the order flips the face normal.

use glam::Vec3;

use crate::math::triangle_normal;
use crate::procedural::types::MeshVertex;

/// Recompute the normals of a row-major `width × height` vertex grid in place
///
/// Only positions are read. Averages are not renormalized, so a vertex whose
/// incident faces disagree ends up with a normal shorter than one.
///
/// `vertices.len()` must equal `width * height` and both dimensions must be
/// at least 2; callers validate this before generating positions.
pub fn compute_grid_normals(vertices: &mut [MeshVertex], width: usize, height: usize) {
    debug_assert!(width >= 2 && height >= 2);
    debug_assert_eq!(vertices.len(), width * height);

    let wm1 = width - 1;
    let hm1 = height - 1;
    let positions: Vec<Vec3> = vertices.iter().map(MeshVertex::position_vec).collect();
    let p = |x: usize, z: usize| positions[z * width + x];

    for z in 0..height {
        for x in 0..width {
            let c = p(x, z);
            let normal = match (x, z) {
                // Corners
                (0, 0) => triangle_normal(c, p(0, 1), p(1, 0)),
                (x, z) if x == wm1 && z == hm1 => {
                    triangle_normal(c, p(wm1, hm1 - 1), p(wm1 - 1, hm1))
                }
                (x, 0) if x == wm1 => average_faces(
                    &[(p(wm1 - 1, 0), p(wm1 - 1, 1)), (p(wm1 - 1, 1), p(wm1, 1))],
                    c,
                ),
                (0, z) if z == hm1 => average_faces(
                    &[(p(1, hm1), p(1, hm1 - 1)), (p(1, hm1 - 1), p(0, hm1 - 1))],
                    c,
                ),

                // Left and right borders
                (0, z) => average_faces(
                    &[
                        (p(1, z), p(1, z - 1)),
                        (p(1, z - 1), p(0, z - 1)),
                        (p(0, z + 1), p(1, z)),
                    ],
                    c,
                ),
                (x, z) if x == wm1 => average_faces(
                    &[
                        (p(x, z - 1), p(x - 1, z)),
                        (p(x - 1, z), p(x - 1, z + 1)),
                        (p(x - 1, z + 1), p(x, z + 1)),
                    ],
                    c,
                ),

                // Top and bottom borders
                (x, 0) => average_faces(
                    &[
                        (p(x - 1, 0), p(x - 1, 1)),
                        (p(x - 1, 1), p(x, 1)),
                        (p(x, 1), p(x + 1, 0)),
                    ],
                    c,
                ),
                (x, z) if z == hm1 => average_faces(
                    &[
                        (p(x + 1, z), p(x + 1, z - 1)),
                        (p(x + 1, z - 1), p(x, z - 1)),
                        (p(x, z - 1), p(x - 1, z)),
                    ],
                    c,
                ),

                // Interior: right, up-right, up, left, down-left, down
                (x, z) => average_faces(
                    &[
                        (p(x + 1, z), p(x + 1, z - 1)),
                        (p(x + 1, z - 1), p(x, z - 1)),
                        (p(x, z - 1), p(x - 1, z)),
                        (p(x - 1, z), p(x - 1, z + 1)),
                        (p(x - 1, z + 1), p(x, z + 1)),
                        (p(x, z + 1), p(x + 1, z)),
                    ],
                    c,
                ),
            };
            vertices[z * width + x].normal = normal.to_array();
        }
    }
}

/// Mean of the normals of the faces `(c, a, b)`
fn average_faces(faces: &[(Vec3, Vec3)], c: Vec3) -> Vec3 {
    let sum: Vec3 = faces.iter().map(|&(a, b)| triangle_normal(c, a, b)).sum();
    sum / faces.len() as f32
}
