//! Draw calls and their replay

use geomkit_common::{DrawDescriptor, PrimitiveMode, expand_triangles};
use smallvec::SmallVec;

use super::backend::{GeometryBackend, VertexArrayId};

/// One draw call against a geometry's vertex array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    /// Non-indexed draw of `count` vertices starting at vertex `first`
    Arrays {
        mode: PrimitiveMode,
        first: u32,
        count: u32,
    },
    /// Indexed draw of `count` indices starting at `byte_offset` into the
    /// index buffer
    Elements {
        mode: PrimitiveMode,
        count: u32,
        byte_offset: u32,
    },
}

/// Draw calls of a single geometry; at most six for the fixed shapes
pub type DrawCalls = SmallVec<[DrawCall; 6]>;

impl DrawCall {
    /// Strip draw over `count` vertices from `first`
    pub const fn strip(first: u32, count: u32) -> Self {
        Self::Arrays {
            mode: PrimitiveMode::TriangleStrip,
            first,
            count,
        }
    }

    /// Fan draw over `count` vertices from `first`
    pub const fn fan(first: u32, count: u32) -> Self {
        Self::Arrays {
            mode: PrimitiveMode::TriangleFan,
            first,
            count,
        }
    }

    /// Primitive mode of this draw
    pub const fn mode(&self) -> PrimitiveMode {
        match *self {
            Self::Arrays { mode, .. } | Self::Elements { mode, .. } => mode,
        }
    }

    /// Number of vertices or indices consumed
    pub const fn count(&self) -> u32 {
        match *self {
            Self::Arrays { count, .. } | Self::Elements { count, .. } => count,
        }
    }

    /// Issue this draw on `backend` with `vao` bound
    pub fn issue<B: GeometryBackend + ?Sized>(&self, backend: &mut B, vao: VertexArrayId) {
        match *self {
            Self::Arrays { mode, first, count } => backend.draw_arrays(vao, mode, first, count),
            Self::Elements {
                mode,
                count,
                byte_offset,
            } => backend.draw_elements(vao, mode, count, byte_offset),
        }
    }
}

/// One indexed draw per row of `descriptor`
pub fn indexed_draws(descriptor: &DrawDescriptor) -> DrawCalls {
    descriptor
        .rows()
        .map(|(count, byte_offset)| DrawCall::Elements {
            mode: descriptor.mode,
            count,
            byte_offset,
        })
        .collect()
}

/// Resolve draw calls to the triangles they rasterize
///
/// `indices` is the geometry's index buffer, required by indexed draws.
/// Degenerate triangles (a repeated vertex) are dropped. Indexed draws whose
/// range falls outside `indices` contribute nothing.
pub fn triangulate(calls: &[DrawCall], indices: Option<&[u32]>) -> Vec<[u32; 3]> {
    let mut triangles = Vec::new();
    for call in calls {
        let expanded = match *call {
            DrawCall::Arrays { mode, first, count } => {
                let range: Vec<u32> = (first..first + count).collect();
                expand_triangles(mode, &range)
            }
            DrawCall::Elements {
                mode,
                count,
                byte_offset,
            } => {
                let start = (byte_offset / geomkit_common::INDEX_ELEMENT_SIZE) as usize;
                let end = start + count as usize;
                match indices.and_then(|all| all.get(start..end)) {
                    Some(row) => expand_triangles(mode, row),
                    None => Vec::new(),
                }
            }
        };
        triangles.extend(
            expanded
                .into_iter()
                .filter(|&[a, b, c]| a != b && b != c && a != c),
        );
    }
    triangles
}
