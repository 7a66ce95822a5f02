//! Live geometry records

use smallvec::SmallVec;

use super::shape::{ShapeData, ShapeKind};
use crate::graphics::{BufferId, DrawCalls, VertexArrayId};

/// Backend buffers owned by one geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryBuffers {
    pub vertices: BufferId,
    /// Element buffer of grid-indexed shapes
    pub indices: Option<BufferId>,
}

impl GeometryBuffers {
    /// All buffers, vertex buffer first
    pub fn all(&self) -> SmallVec<[BufferId; 2]> {
        let mut buffers = SmallVec::new();
        buffers.push(self.vertices);
        buffers.extend(self.indices);
        buffers
    }
}

/// One live geometry in the handle table
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryRecord {
    /// 0-based table identifier; the public handle is `id + 1`
    pub id: u32,
    pub vertex_array: VertexArrayId,
    pub buffers: GeometryBuffers,
    pub shape: ShapeData,
}

impl GeometryRecord {
    /// Public handle of this record
    pub fn handle(&self) -> u32 {
        self.id + 1
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn draw_calls(&self) -> DrawCalls {
        self.shape.draw_calls()
    }
}
