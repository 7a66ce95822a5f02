//! Procedural mesh generation
//!
//! Vertex generators for the built-in primitives, the grid normal
//! reconstructor and the OBJ exporter.
//!
//! Every generator except the sphere returns interleaved [`MeshVertex`]
//! data (position, normal, texture coordinate; 8 floats per vertex). The
//! sphere returns [`SphereVertex`] data (5 floats per vertex) and relies on
//! [`VertexLayout::SPHERE`] to read its normal from the position.

mod export;
mod normals;
mod primitives;
mod types;

#[cfg(test)]
mod tests;

pub use types::{MeshVertex, SphereVertex, VertexLayout};

// Re-export OBJ export
pub use export::write_obj;

pub use normals::compute_grid_normals;

pub use primitives::{
    CUBE, QUAD, TEAPOT_VERTICES_PER_SLICE, cone_vertices, cube_vertices, cylinder_vertices,
    disk_vertices, fan_cone_vertices, grid2d_vertices, quad_vertices, sphere_vertices,
    teapot_vertices, torus_vertices,
};
