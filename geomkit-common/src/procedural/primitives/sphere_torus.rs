//! Surfaces of revolution sampled on a regular grid (sphere, torus)
//!
//! Both shapes lay their vertices out as a `(slices + 1) × (stacks + 1)`
//! lattice so the grid index topologies apply to them unchanged.

use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{require_subdivision, vertex_count};
use crate::error::GenerateError;
use crate::procedural::types::{MeshVertex, SphereVertex};

/// Generate a unit UV sphere
///
/// # Arguments
/// * `slices` - Longitude divisions (min 1)
/// * `stacks` - Latitude divisions (min 1)
///
/// # Returns
/// `(slices + 1) × (stacks + 1)` vertices, stack-major. Latitude runs from
/// the south pole (`θ = -π/2`) to the north pole, longitude from 0 to 2π
/// inclusive so the texture seam has its own column.
///
/// The normal of a unit sphere is its position, so the vertices carry no
/// normal; bind them with [`VertexLayout::SPHERE`](crate::VertexLayout::SPHERE).
pub fn sphere_vertices(slices: u32, stacks: u32) -> Result<Vec<SphereVertex>, GenerateError> {
    require_subdivision("sphere", "slices", slices)?;
    require_subdivision("sphere", "stacks", stacks)?;
    let count = lattice_len("sphere", slices, stacks)?;

    let longitude_step = TAU / slices as f64;
    let latitude_step = PI / stacks as f64;
    let mut vertices = Vec::with_capacity(count);

    for i in 0..=stacks {
        let theta = -FRAC_PI_2 + i as f64 * latitude_step;
        let y = theta.sin();
        let ring = theta.cos();
        let v = (theta + FRAC_PI_2) / PI;

        for j in 0..=slices {
            let phi = j as f64 * longitude_step;
            vertices.push(SphereVertex {
                position: [
                    (ring * phi.cos()) as f32,
                    y as f32,
                    (ring * phi.sin()) as f32,
                ],
                uv: [(1.0 - phi / TAU) as f32, v as f32],
            });
        }
    }

    Ok(vertices)
}

/// Generate a torus around the Y axis
///
/// # Arguments
/// * `slices` - Divisions around the ring (min 1)
/// * `stacks` - Divisions around the tube (min 1)
/// * `radius` - Tube radius, in (0, 1]
///
/// # Returns
/// `(slices + 1) × (stacks + 1)` interleaved vertices. The tube centre
/// circle has radius `1 - radius`, so the torus spans `[-1, 1]` in X and Z.
/// Normals point from the tube centre circle to the surface point.
pub fn torus_vertices(
    slices: u32,
    stacks: u32,
    radius: f32,
) -> Result<Vec<MeshVertex>, GenerateError> {
    require_subdivision("torus", "slices", slices)?;
    require_subdivision("torus", "stacks", stacks)?;
    if !(radius > 0.0 && radius <= 1.0) {
        return Err(GenerateError::TorusRadius(radius));
    }
    let count = lattice_len("torus", slices, stacks)?;

    let tube = radius as f64;
    let ring_radius = 1.0 - tube;
    let longitude_step = TAU / slices as f64;
    let tube_step = TAU / stacks as f64;
    let mut vertices = Vec::with_capacity(count);

    for i in 0..=stacks {
        let theta = i as f64 * tube_step;
        let y = tube * theta.sin();
        let r = tube * theta.cos();

        for j in 0..=slices {
            let phi = j as f64 * longitude_step;
            let (z, x) = phi.sin_cos();

            let position = DVec3::new((ring_radius + r) * x, y, (ring_radius + r) * z);
            let centre = DVec3::new(ring_radius * x, 0.0, ring_radius * z);
            let normal = (position - centre).normalize_or_zero();

            vertices.push(MeshVertex::from_f64(
                position.to_array(),
                normal.to_array(),
                [phi / TAU, theta / TAU],
            ));
        }
    }

    Ok(vertices)
}

/// Vertex count of a `(slices + 1) × (stacks + 1)` lattice
fn lattice_len(shape: &'static str, slices: u32, stacks: u32) -> Result<usize, GenerateError> {
    let columns = slices.checked_add(1);
    let rows = stacks.checked_add(1);
    vertex_count(
        shape,
        columns.zip(rows).and_then(|(w, h)| w.checked_mul(h)),
    )
}
