//! Flat grid and heightmap terrain

use super::{require_grid, vertex_count};
use crate::error::GenerateError;
use crate::procedural::normals::compute_grid_normals;
use crate::procedural::types::MeshVertex;

/// Generate a `width × height` vertex grid spanning `[-1, 1]` in X and Z
///
/// # Arguments
/// * `width` - Vertices along X (min 2)
/// * `height` - Vertices along Z (min 2)
/// * `heightmap` - Optional row-major samples, one per vertex, usually in
///   `[0, 1]`
///
/// Without a heightmap the grid is flat at `y = 0` with normals `(0, 1, 0)`.
/// With one, sample `heightmap[i * width + j]` lifts vertex `(j, i)` to
/// `y = 2 * sample - 1` and normals are reconstructed from the faces.
///
/// Texture coordinates run from `(0, 0)` at the first vertex to `(1, 1)` at
/// the last.
pub fn grid2d_vertices(
    width: u32,
    height: u32,
    heightmap: Option<&[f32]>,
) -> Result<Vec<MeshVertex>, GenerateError> {
    require_grid(width, height)?;
    let count = vertex_count("grid", width.checked_mul(height))?;
    let (w, h) = (width as usize, height as usize);
    match heightmap {
        Some(samples) if samples.len() != count => {
            return Err(GenerateError::HeightmapSize {
                expected: count,
                actual: samples.len(),
            });
        }
        _ => {}
    }

    let mut vertices = Vec::with_capacity(count);
    for i in 0..h {
        let tz = i as f32 / (height as f32 - 1.0);
        let z = -1.0 + 2.0 * tz;
        for j in 0..w {
            let tx = j as f32 / (width as f32 - 1.0);
            let x = -1.0 + 2.0 * tx;
            let y = heightmap.map_or(0.0, |samples| 2.0 * samples[i * w + j] - 1.0);
            vertices.push(MeshVertex::new([x, y, z], [0.0, 1.0, 0.0], [tx, tz]));
        }
    }

    if heightmap.is_some() {
        compute_grid_normals(&mut vertices, w, h);
    }

    Ok(vertices)
}
