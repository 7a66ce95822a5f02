//! Geometry manager state: handle table, records, shape payloads and config

mod config;
mod handle_table;
mod record;
mod shape;

pub use config::GeometryConfig;
pub use handle_table::{DEFAULT_INITIAL_CAPACITY, HandleTable};
pub use record::{GeometryBuffers, GeometryRecord};
pub use shape::{GridDraw, ShapeData, ShapeKind, ShapeMesh, ShapeParams, VertexData};
