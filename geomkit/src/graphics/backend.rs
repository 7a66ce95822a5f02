//! Graphics backend seam
//!
//! The manager never talks to a graphics API directly. It hands flat vertex
//! and index arrays to a [`GeometryBackend`] and replays draws through it.
//! [`RecordingBackend`] keeps everything in memory, which is what tests and
//! the command-line tool use.

use std::collections::BTreeMap;

use geomkit_common::{MeshVertex, PrimitiveMode, VertexLayout};

/// Backend vertex-array object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexArrayId(pub u32);

/// Backend buffer object (vertex or index data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(pub u32);

/// GPU resource operations the geometry manager needs
///
/// All calls happen on the thread that owns the graphics context.
pub trait GeometryBackend {
    /// Create an empty vertex array
    fn create_vertex_array(&mut self) -> VertexArrayId;

    /// Upload a flat vertex array and bind its attributes on `vao`
    ///
    /// Attribute 0 is the position, 1 the normal and 2 the texture
    /// coordinate, at the offsets given by `layout`.
    fn upload_vertices(
        &mut self,
        vao: VertexArrayId,
        data: &[f32],
        layout: VertexLayout,
    ) -> BufferId;

    /// Upload an index array and bind it as `vao`'s element buffer
    fn upload_indices(&mut self, vao: VertexArrayId, indices: &[u32]) -> BufferId;

    /// Non-indexed draw of `count` vertices starting at `first`
    fn draw_arrays(&mut self, vao: VertexArrayId, mode: PrimitiveMode, first: u32, count: u32);

    /// Indexed draw of `count` `u32` indices starting at `byte_offset`
    fn draw_elements(
        &mut self,
        vao: VertexArrayId,
        mode: PrimitiveMode,
        count: u32,
        byte_offset: u32,
    );

    /// Destroy a vertex array
    fn delete_vertex_array(&mut self, vao: VertexArrayId);

    /// Destroy buffers
    fn delete_buffers(&mut self, buffers: &[BufferId]);
}

/// Every call made on a [`RecordingBackend`], in order
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    CreateVertexArray(VertexArrayId),
    UploadVertices {
        vao: VertexArrayId,
        buffer: BufferId,
        floats: usize,
        layout: VertexLayout,
    },
    UploadIndices {
        vao: VertexArrayId,
        buffer: BufferId,
        count: usize,
    },
    DrawArrays {
        vao: VertexArrayId,
        mode: PrimitiveMode,
        first: u32,
        count: u32,
    },
    DrawElements {
        vao: VertexArrayId,
        mode: PrimitiveMode,
        count: u32,
        byte_offset: u32,
    },
    DeleteVertexArray(VertexArrayId),
    DeleteBuffer(BufferId),
}

/// Contents of a recorded buffer
#[derive(Debug, Clone, PartialEq)]
pub enum BufferData {
    Vertices { data: Vec<f32>, layout: VertexLayout },
    Indices(Vec<u32>),
}

/// Buffers attached to one recorded vertex array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexArrayBindings {
    pub vertices: Option<BufferId>,
    pub indices: Option<BufferId>,
}

/// In-memory backend that records commands and keeps uploaded data
///
/// Object ids start at 1 and are never reused, so a stale id always misses.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_id: u32,
    vertex_arrays: BTreeMap<VertexArrayId, VertexArrayBindings>,
    buffers: BTreeMap<BufferId, BufferData>,
    commands: Vec<BackendCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_object(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[BackendCommand] {
        &self.commands
    }

    /// Forget recorded commands, keeping live objects
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Draw commands recorded so far
    pub fn draws(&self) -> impl Iterator<Item = &BackendCommand> {
        self.commands.iter().filter(|c| {
            matches!(
                c,
                BackendCommand::DrawArrays { .. } | BackendCommand::DrawElements { .. }
            )
        })
    }

    /// Number of live vertex arrays
    pub fn live_vertex_arrays(&self) -> usize {
        self.vertex_arrays.len()
    }

    /// Number of live buffers
    pub fn live_buffers(&self) -> usize {
        self.buffers.len()
    }

    /// Buffers bound to a live vertex array
    pub fn bindings(&self, vao: VertexArrayId) -> Option<&VertexArrayBindings> {
        self.vertex_arrays.get(&vao)
    }

    /// Contents of a live buffer
    pub fn buffer(&self, buffer: BufferId) -> Option<&BufferData> {
        self.buffers.get(&buffer)
    }

    /// Index data bound to `vao`, if it has any
    pub fn index_data(&self, vao: VertexArrayId) -> Option<&[u32]> {
        let id = self.bindings(vao)?.indices?;
        match self.buffers.get(&id)? {
            BufferData::Indices(indices) => Some(indices.as_slice()),
            BufferData::Vertices { .. } => None,
        }
    }

    /// Vertex data bound to `vao`, expanded to interleaved vertices
    ///
    /// Reads each attribute at its layout offset, so layouts that share the
    /// position as the normal come back with explicit normals.
    pub fn mesh_vertices(&self, vao: VertexArrayId) -> Option<Vec<MeshVertex>> {
        let id = self.bindings(vao)?.vertices?;
        let BufferData::Vertices { data, layout } = self.buffers.get(&id)? else {
            return None;
        };

        let p = layout.position_offset as usize;
        let n = layout.normal_offset as usize;
        let t = layout.uv_offset as usize;
        let vertices = data
            .chunks_exact(layout.stride as usize)
            .map(|v| {
                MeshVertex::new(
                    [v[p], v[p + 1], v[p + 2]],
                    [v[n], v[n + 1], v[n + 2]],
                    [v[t], v[t + 1]],
                )
            })
            .collect();
        Some(vertices)
    }
}

impl GeometryBackend for RecordingBackend {
    fn create_vertex_array(&mut self) -> VertexArrayId {
        let vao = VertexArrayId(self.next_object());
        self.vertex_arrays.insert(vao, VertexArrayBindings::default());
        self.commands.push(BackendCommand::CreateVertexArray(vao));
        vao
    }

    fn upload_vertices(
        &mut self,
        vao: VertexArrayId,
        data: &[f32],
        layout: VertexLayout,
    ) -> BufferId {
        let buffer = BufferId(self.next_object());
        self.buffers.insert(
            buffer,
            BufferData::Vertices {
                data: data.to_vec(),
                layout,
            },
        );
        if let Some(bindings) = self.vertex_arrays.get_mut(&vao) {
            bindings.vertices = Some(buffer);
        }
        self.commands.push(BackendCommand::UploadVertices {
            vao,
            buffer,
            floats: data.len(),
            layout,
        });
        buffer
    }

    fn upload_indices(&mut self, vao: VertexArrayId, indices: &[u32]) -> BufferId {
        let buffer = BufferId(self.next_object());
        self.buffers.insert(buffer, BufferData::Indices(indices.to_vec()));
        if let Some(bindings) = self.vertex_arrays.get_mut(&vao) {
            bindings.indices = Some(buffer);
        }
        self.commands.push(BackendCommand::UploadIndices {
            vao,
            buffer,
            count: indices.len(),
        });
        buffer
    }

    fn draw_arrays(&mut self, vao: VertexArrayId, mode: PrimitiveMode, first: u32, count: u32) {
        self.commands.push(BackendCommand::DrawArrays {
            vao,
            mode,
            first,
            count,
        });
    }

    fn draw_elements(
        &mut self,
        vao: VertexArrayId,
        mode: PrimitiveMode,
        count: u32,
        byte_offset: u32,
    ) {
        self.commands.push(BackendCommand::DrawElements {
            vao,
            mode,
            count,
            byte_offset,
        });
    }

    fn delete_vertex_array(&mut self, vao: VertexArrayId) {
        self.vertex_arrays.remove(&vao);
        self.commands.push(BackendCommand::DeleteVertexArray(vao));
    }

    fn delete_buffers(&mut self, buffers: &[BufferId]) {
        for &buffer in buffers {
            self.buffers.remove(&buffer);
            self.commands.push(BackendCommand::DeleteBuffer(buffer));
        }
    }
}
