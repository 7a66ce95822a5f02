//! Graphics backend seam and draw dispatch

mod backend;
mod draw;

pub use backend::{
    BackendCommand, BufferData, BufferId, GeometryBackend, RecordingBackend, VertexArrayBindings,
    VertexArrayId,
};
pub use draw::{DrawCall, DrawCalls, indexed_draws, triangulate};
