//! Shape requests, generated meshes and per-shape payloads
//!
//! [`ShapeParams`] is what callers ask for. [`ShapeParams::build`] turns it
//! into a [`ShapeMesh`] without touching the backend: vertex data, optional
//! grid indices, and the [`ShapeData`] payload stored in the handle table.
//! The payload is all the draw dispatcher needs to replay the shape.

use std::fmt;

use geomkit_common::{
    DrawDescriptor, GenerateError, MeshVertex, OptimizationLevel, SphereVertex, VertexLayout,
    cone_vertices, cube_vertices, cylinder_vertices, disk_vertices, fan_cone_vertices,
    grid2d_vertices, quad_vertices, sphere_vertices, teapot_vertices, torus_vertices,
};

use crate::graphics::{DrawCall, DrawCalls, indexed_draws};

/// Kind of a generated shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Quad,
    Cube,
    Cone,
    FanCone,
    Cylinder,
    Disk,
    Torus,
    Grid2d,
    Teapot,
}

impl ShapeKind {
    /// Lowercase name used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Quad => "quad",
            Self::Cube => "cube",
            Self::Cone => "cone",
            Self::FanCone => "fan cone",
            Self::Cylinder => "cylinder",
            Self::Disk => "disk",
            Self::Torus => "torus",
            Self::Grid2d => "grid2d",
            Self::Teapot => "teapot",
        }
    }

    /// Whether the shape is drawn from a grid index buffer
    pub const fn is_indexed(self) -> bool {
        matches!(self, Self::Sphere | Self::Torus | Self::Grid2d)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape generation request
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeParams {
    Sphere {
        slices: u32,
        stacks: u32,
    },
    Quad,
    Cube,
    Cone {
        slices: u32,
        base: bool,
    },
    FanCone {
        slices: u32,
        base: bool,
    },
    Cylinder {
        slices: u32,
        base: bool,
    },
    Disk {
        slices: u32,
    },
    Torus {
        slices: u32,
        stacks: u32,
        radius: f32,
    },
    Grid2d {
        width: u32,
        height: u32,
        /// Row-major samples, one per vertex
        heightmap: Option<Vec<f32>>,
    },
    Teapot {
        slices: u32,
    },
}

impl ShapeParams {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Quad => ShapeKind::Quad,
            Self::Cube => ShapeKind::Cube,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::FanCone { .. } => ShapeKind::FanCone,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Disk { .. } => ShapeKind::Disk,
            Self::Torus { .. } => ShapeKind::Torus,
            Self::Grid2d { .. } => ShapeKind::Grid2d,
            Self::Teapot { .. } => ShapeKind::Teapot,
        }
    }

    /// Generate vertices, indices and payload for this request
    ///
    /// Grid-indexed shapes (sphere, torus, grid) use `level` to pick their
    /// index topology; the others ignore it. Pure: nothing is allocated on
    /// any backend, and an error means nothing was produced.
    pub fn build(&self, level: OptimizationLevel) -> Result<ShapeMesh, GenerateError> {
        let grid = |w: u32, h: u32| -> Result<(GridDraw, Vec<u32>), GenerateError> {
            let indices = level.grid_indices(w, h)?;
            let draw = GridDraw {
                level,
                descriptor: indices.descriptor,
            };
            Ok((draw, indices.indices))
        };

        let mesh = match *self {
            Self::Sphere { slices, stacks } => {
                check_lattice(level, slices, stacks)?;
                let vertices = sphere_vertices(slices, stacks)?;
                let (topology, indices) = grid(slices + 1, stacks + 1)?;
                ShapeMesh {
                    vertices: VertexData::Sphere(vertices),
                    indices: Some(indices),
                    shape: ShapeData::Sphere {
                        slices,
                        stacks,
                        topology,
                    },
                }
            }
            Self::Torus {
                slices,
                stacks,
                radius,
            } => {
                check_lattice(level, slices, stacks)?;
                let vertices = torus_vertices(slices, stacks, radius)?;
                let (topology, indices) = grid(slices + 1, stacks + 1)?;
                ShapeMesh {
                    vertices: VertexData::Interleaved(vertices),
                    indices: Some(indices),
                    shape: ShapeData::Torus {
                        slices,
                        stacks,
                        radius,
                        topology,
                    },
                }
            }
            Self::Grid2d {
                width,
                height,
                ref heightmap,
            } => {
                level.descriptor(width, height)?;
                let vertices = grid2d_vertices(width, height, heightmap.as_deref())?;
                let (topology, indices) = grid(width, height)?;
                ShapeMesh {
                    vertices: VertexData::Interleaved(vertices),
                    indices: Some(indices),
                    shape: ShapeData::Grid2d {
                        width,
                        height,
                        heightmap: heightmap.is_some(),
                        topology,
                    },
                }
            }
            Self::Quad => ShapeMesh::arrays(quad_vertices(), ShapeData::Quad),
            Self::Cube => ShapeMesh::arrays(cube_vertices(), ShapeData::Cube),
            Self::Cone { slices, base } => {
                ShapeMesh::arrays(cone_vertices(slices, base)?, ShapeData::Cone { slices, base })
            }
            Self::FanCone { slices, base } => ShapeMesh::arrays(
                fan_cone_vertices(slices, base)?,
                ShapeData::FanCone { slices, base },
            ),
            Self::Cylinder { slices, base } => ShapeMesh::arrays(
                cylinder_vertices(slices, base)?,
                ShapeData::Cylinder { slices, base },
            ),
            Self::Disk { slices } => {
                ShapeMesh::arrays(disk_vertices(slices)?, ShapeData::Disk { slices })
            }
            Self::Teapot { slices } => {
                ShapeMesh::arrays(teapot_vertices(slices)?, ShapeData::Teapot { slices })
            }
        };

        Ok(mesh)
    }
}

/// Reject a sphere or torus lattice whose index buffer cannot be addressed,
/// before any vertex is generated
///
/// Zero or overflowing subdivisions are left to the vertex generators,
/// which report them by shape and parameter.
fn check_lattice(
    level: OptimizationLevel,
    slices: u32,
    stacks: u32,
) -> Result<(), GenerateError> {
    match (slices.checked_add(1), stacks.checked_add(1)) {
        (Some(w), Some(h)) if slices > 0 && stacks > 0 => level.descriptor(w, h).map(drop),
        _ => Ok(()),
    }
}

/// Generated vertex stream in one of the two supported layouts
#[derive(Debug, Clone, PartialEq)]
pub enum VertexData {
    /// Position, normal, texture coordinate
    Interleaved(Vec<MeshVertex>),
    /// Position and texture coordinate; the normal is read from the position
    Sphere(Vec<SphereVertex>),
}

impl VertexData {
    /// Flat float view for upload
    pub fn as_floats(&self) -> &[f32] {
        match self {
            Self::Interleaved(v) => bytemuck::cast_slice(v),
            Self::Sphere(v) => bytemuck::cast_slice(v),
        }
    }

    /// Attribute layout of [`as_floats`](Self::as_floats)
    pub fn layout(&self) -> VertexLayout {
        match self {
            Self::Interleaved(_) => VertexLayout::INTERLEAVED,
            Self::Sphere(_) => VertexLayout::SPHERE,
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        match self {
            Self::Interleaved(v) => v.len(),
            Self::Sphere(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything a shape needs uploaded, plus its payload
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMesh {
    pub vertices: VertexData,
    /// Grid index buffer; `None` for shapes drawn with array draws
    pub indices: Option<Vec<u32>>,
    pub shape: ShapeData,
}

impl ShapeMesh {
    fn arrays(vertices: Vec<MeshVertex>, shape: ShapeData) -> Self {
        Self {
            vertices: VertexData::Interleaved(vertices),
            indices: None,
            shape,
        }
    }
}

/// Index topology a grid-indexed shape was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDraw {
    /// Optimization level in effect at generation time
    pub level: OptimizationLevel,
    pub descriptor: DrawDescriptor,
}

/// Per-shape payload stored with each live geometry
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeData {
    Sphere {
        slices: u32,
        stacks: u32,
        topology: GridDraw,
    },
    Quad,
    Cube,
    Cone {
        slices: u32,
        base: bool,
    },
    FanCone {
        slices: u32,
        base: bool,
    },
    Cylinder {
        slices: u32,
        base: bool,
    },
    Disk {
        slices: u32,
    },
    Torus {
        slices: u32,
        stacks: u32,
        radius: f32,
        topology: GridDraw,
    },
    Grid2d {
        width: u32,
        height: u32,
        /// Built from a heightmap rather than flat
        heightmap: bool,
        topology: GridDraw,
    },
    Teapot {
        slices: u32,
    },
}

impl ShapeData {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Quad => ShapeKind::Quad,
            Self::Cube => ShapeKind::Cube,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::FanCone { .. } => ShapeKind::FanCone,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Disk { .. } => ShapeKind::Disk,
            Self::Torus { .. } => ShapeKind::Torus,
            Self::Grid2d { .. } => ShapeKind::Grid2d,
            Self::Teapot { .. } => ShapeKind::Teapot,
        }
    }

    /// Grid topology, for grid-indexed shapes
    pub fn topology(&self) -> Option<&GridDraw> {
        match self {
            Self::Sphere { topology, .. }
            | Self::Torus { topology, .. }
            | Self::Grid2d { topology, .. } => Some(topology),
            _ => None,
        }
    }

    /// Logical grid size `(w, h)` the index buffer was built for
    pub fn grid_size(&self) -> Option<(u32, u32)> {
        match *self {
            Self::Sphere { slices, stacks, .. } | Self::Torus { slices, stacks, .. } => {
                Some((slices + 1, stacks + 1))
            }
            Self::Grid2d { width, height, .. } => Some((width, height)),
            _ => None,
        }
    }

    /// The draw calls that render this shape, in order
    ///
    /// Ranges are computed in `u32`; [`ShapeParams::build`] rejects any
    /// shape whose vertex count would not fit.
    pub fn draw_calls(&self) -> DrawCalls {
        let mut calls = DrawCalls::new();
        match *self {
            Self::Sphere { ref topology, .. }
            | Self::Torus { ref topology, .. }
            | Self::Grid2d { ref topology, .. } => {
                return indexed_draws(&topology.descriptor);
            }
            Self::Quad => calls.push(DrawCall::strip(0, 4)),
            Self::Cube => calls.extend((0..6).map(|face| DrawCall::strip(4 * face, 4))),
            Self::Cone { slices, base } => {
                let lateral = 2 * (slices + 1);
                calls.push(DrawCall::strip(0, lateral));
                if base {
                    calls.push(DrawCall::fan(lateral, slices + 2));
                }
            }
            Self::FanCone { slices, base } => {
                let fan = slices + 2;
                calls.push(DrawCall::fan(0, fan));
                if base {
                    calls.push(DrawCall::fan(fan, fan));
                }
            }
            Self::Cylinder { slices, base } => {
                let lateral = 2 * (slices + 1);
                let fan = slices + 2;
                calls.push(DrawCall::strip(0, lateral));
                if base {
                    calls.push(DrawCall::fan(lateral, fan));
                    calls.push(DrawCall::fan(lateral + fan, fan));
                }
            }
            Self::Disk { slices } => calls.push(DrawCall::fan(0, slices + 2)),
            Self::Teapot { slices } => calls.push(DrawCall::strip(0, 49 * slices + 1)),
        }
        calls
    }
}
