//! geomkit - Procedural geometry with handle-managed GPU buffers
//!
//! Client code asks a [`GeometryManager`] for a shape and gets back an opaque
//! handle (a positive `u32`, 0 is never valid). The manager builds the
//! vertex and index data with `geomkit-common`, uploads it through a
//! [`GeometryBackend`], and later replays the shape's draw calls or releases
//! its backend objects.
//!
//! ```
//! use geomkit::{GeometryConfig, GeometryManager, RecordingBackend};
//!
//! let mut manager = GeometryManager::new(RecordingBackend::new(), GeometryConfig::default());
//! let sphere = manager.gen_sphere(16, 8)?;
//! manager.draw(sphere)?;
//! manager.delete(sphere)?;
//! manager.teardown();
//! # Ok::<(), geomkit::GeometryError>(())
//! ```

pub mod error;
pub mod graphics;
pub mod resource_manager;
pub mod state;

pub use error::{ConfigError, GeometryError};
pub use graphics::{
    BackendCommand, BufferId, DrawCall, DrawCalls, GeometryBackend, RecordingBackend,
    VertexArrayId, triangulate,
};
pub use resource_manager::GeometryManager;
pub use state::{GeometryConfig, GeometryRecord, HandleTable, ShapeData, ShapeKind, ShapeParams};

// Generators, topologies and export live in the GPU-free crate
pub use geomkit_common::{GenerateError, OptimizationLevel, PrimitiveMode};
