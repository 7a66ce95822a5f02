//! GPU-free geometry for geomkit
//!
//! This crate holds everything that can be computed without a graphics
//! context. It is shared between:
//! - `geomkit` (handle table, upload and draw dispatch)
//! - the `geomkit` binary (OBJ export and statistics)
//!
//! # Modules
//!
//! - [`math`] - Vector helpers (cross product, normalization, triangle normals)
//! - [`procedural`] - Vertex generators, the grid normal reconstructor and OBJ export
//! - [`topology`] - Index topologies for regular grids and primitive expansion

pub mod error;
pub mod math;
pub mod procedural;
pub mod topology;

pub use error::GenerateError;

// Re-export commonly used generator items
pub use procedural::{
    MeshVertex, SphereVertex, VertexLayout, cone_vertices, cube_vertices, cylinder_vertices,
    disk_vertices, fan_cone_vertices, grid2d_vertices, quad_vertices, sphere_vertices,
    teapot_vertices, torus_vertices, write_obj,
};

// Re-export commonly used topology items
pub use topology::{
    DrawDescriptor, GridIndices, INDEX_ELEMENT_SIZE, OptimizationLevel, PrimitiveMode,
    expand_triangles,
};
