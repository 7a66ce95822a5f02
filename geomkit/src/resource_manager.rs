//! Geometry manager
//!
//! Maps public geometry handles (u32, 1-based) to backend vertex arrays and
//! buffers, and replays each shape's draw calls through the backend.
//!
//! A generation request is validated and fully built before anything is
//! created on the backend, so a rejected request leaves no trace in either
//! the handle table or the backend.

use geomkit_common::OptimizationLevel;
use tracing::{debug, info, warn};

use crate::error::GeometryError;
use crate::graphics::{GeometryBackend, VertexArrayId};
use crate::state::{
    GeometryBuffers, GeometryConfig, GeometryRecord, HandleTable, ShapeMesh, ShapeParams,
};

/// Owner of every live geometry and the backend objects behind it
#[derive(Debug)]
pub struct GeometryManager<B: GeometryBackend> {
    backend: B,
    table: HandleTable<GeometryRecord>,
    /// Level used by the next sphere, torus or grid generation
    level: OptimizationLevel,
}

impl<B: GeometryBackend> GeometryManager<B> {
    /// Create a manager with an empty, pre-populated handle table
    pub fn new(backend: B, config: GeometryConfig) -> Self {
        Self {
            backend,
            table: HandleTable::new("geometry", config.initial_capacity),
            level: config.optimization_level,
        }
    }

    /// Generate a shape, upload it and return its handle
    pub fn generate(&mut self, params: ShapeParams) -> Result<u32, GeometryError> {
        let kind = params.kind();
        let ShapeMesh {
            vertices,
            indices,
            shape,
        } = params.build(self.level)?;

        let vertex_array = self.backend.create_vertex_array();
        let vertex_buffer =
            self.backend
                .upload_vertices(vertex_array, vertices.as_floats(), vertices.layout());
        let index_buffer = indices
            .as_deref()
            .map(|indices| self.backend.upload_indices(vertex_array, indices));

        let buffers = GeometryBuffers {
            vertices: vertex_buffer,
            indices: index_buffer,
        };
        let id = self.table.allocate_with(|id| GeometryRecord {
            id,
            vertex_array,
            buffers,
            shape,
        });
        let handle = id + 1;

        match indices {
            Some(indices) => info!(
                "{kind}: created geometry {handle} ({} vertices, {} indices, level {})",
                vertices.len(),
                indices.len(),
                self.level
            ),
            None => info!(
                "{kind}: created geometry {handle} ({} vertices)",
                vertices.len()
            ),
        }

        Ok(handle)
    }

    /// Unit sphere with `slices` longitude and `stacks` latitude steps
    pub fn gen_sphere(&mut self, slices: u32, stacks: u32) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Sphere { slices, stacks })
    }

    /// Unit quad in the XY plane
    pub fn gen_quad(&mut self) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Quad)
    }

    /// Axis-aligned cube spanning [-1, 1]
    pub fn gen_cube(&mut self) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Cube)
    }

    /// Cone with a strip-built lateral surface and optional base
    pub fn gen_cone(&mut self, slices: u32, base: bool) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Cone { slices, base })
    }

    /// Cone with a fan-built lateral surface and optional base
    pub fn gen_fan_cone(&mut self, slices: u32, base: bool) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::FanCone { slices, base })
    }

    /// Cylinder, capped at both ends when `base` is set
    pub fn gen_cylinder(&mut self, slices: u32, base: bool) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Cylinder { slices, base })
    }

    /// Flat unit disk facing +Y
    pub fn gen_disk(&mut self, slices: u32) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Disk { slices })
    }

    /// Torus with tube `radius` in (0, 1]
    pub fn gen_torus(
        &mut self,
        slices: u32,
        stacks: u32,
        radius: f32,
    ) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Torus {
            slices,
            stacks,
            radius,
        })
    }

    /// Flat `width × height` grid
    pub fn gen_grid2d(&mut self, width: u32, height: u32) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Grid2d {
            width,
            height,
            heightmap: None,
        })
    }

    /// Grid displaced by a row-major heightmap of `width × height` samples
    pub fn gen_grid2d_from_heightmap(
        &mut self,
        width: u32,
        height: u32,
        heightmap: &[f32],
    ) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Grid2d {
            width,
            height,
            heightmap: Some(heightmap.to_vec()),
        })
    }

    /// Teapot revolved in `slices` steps
    pub fn gen_teapot(&mut self, slices: u32) -> Result<u32, GeometryError> {
        self.generate(ShapeParams::Teapot { slices })
    }

    /// Issue the draw calls of a live geometry
    pub fn draw(&mut self, handle: u32) -> Result<(), GeometryError> {
        let record = resolve(&self.table, handle)?;
        for call in record.draw_calls() {
            call.issue(&mut self.backend, record.vertex_array);
        }
        Ok(())
    }

    /// Release a geometry's backend objects and free its handle
    ///
    /// The handle may be handed out again by the next generation.
    pub fn delete(&mut self, handle: u32) -> Result<(), GeometryError> {
        let id = table_id(handle)?;
        let record = self
            .table
            .release(id)
            .ok_or(GeometryError::InvalidHandle(handle))?;
        debug!("{}: deleted geometry {}", record.kind(), handle);
        self.release_objects(&record);
        Ok(())
    }

    /// Release every live geometry and reset the handle table
    ///
    /// Afterwards the manager behaves exactly like a freshly created one
    /// with the same configuration.
    pub fn teardown(&mut self) {
        let live = self.table.drain();
        debug!("Tearing down {} live geometries", live.len());
        for (_, record) in &live {
            self.release_objects(record);
        }
    }

    fn release_objects(&mut self, record: &GeometryRecord) {
        self.backend.delete_vertex_array(record.vertex_array);
        self.backend.delete_buffers(&record.buffers.all());
    }

    /// Record of a live geometry
    pub fn record(&self, handle: u32) -> Result<&GeometryRecord, GeometryError> {
        resolve(&self.table, handle)
    }

    /// Backend vertex array of a live geometry
    pub fn vertex_array(&self, handle: u32) -> Result<VertexArrayId, GeometryError> {
        Ok(self.record(handle)?.vertex_array)
    }

    /// Live geometries in handle order
    pub fn records(&self) -> impl Iterator<Item = &GeometryRecord> {
        self.table.iter().map(|(_, record)| record)
    }

    /// Change the index topology used by subsequent generations
    ///
    /// Existing geometries keep the topology they were built with.
    pub fn set_optimization_level(&mut self, level: OptimizationLevel) {
        if level == self.level {
            return;
        }
        let stale = self
            .records()
            .filter_map(|record| record.shape.topology())
            .filter(|topology| topology.level != level)
            .count();
        if stale > 0 {
            warn!(
                "Optimization level changed {} -> {} with {} indexed geometries still on the old topology",
                self.level, level, stale
            );
        }
        self.level = level;
    }

    pub fn optimization_level(&self) -> OptimizationLevel {
        self.level
    }

    /// Number of live geometries
    pub fn live_count(&self) -> usize {
        self.table.len()
    }

    /// Handle table slot count (live plus free)
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

/// Table identifier for a public handle; zero is never valid
fn table_id(handle: u32) -> Result<u32, GeometryError> {
    handle
        .checked_sub(1)
        .ok_or(GeometryError::InvalidHandle(handle))
}

fn resolve(
    table: &HandleTable<GeometryRecord>,
    handle: u32,
) -> Result<&GeometryRecord, GeometryError> {
    table
        .get(table_id(handle)?)
        .ok_or(GeometryError::InvalidHandle(handle))
}
