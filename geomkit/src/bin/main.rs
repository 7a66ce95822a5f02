//! geomkit - Generate a shape and inspect its buffers
//!
//! Runs one shape through the geometry manager on the in-memory recording
//! backend, prints vertex, index and draw-call statistics, and optionally
//! exports the triangulated mesh as Wavefront OBJ.
//!
//! # Usage
//!
//! ```bash
//! geomkit sphere --slices 32 --stacks 16
//! geomkit --level 2 torus --radius 0.3
//! geomkit grid --width 64 --height 64 --heightmap terrain.txt --obj terrain.obj
//! geomkit --config geomkit.toml teapot --slices 24
//! ```
//!
//! Heightmap files hold `width × height` whitespace-separated samples in
//! row-major order.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use geomkit::{
    GeometryConfig, GeometryManager, OptimizationLevel, RecordingBackend, ShapeParams, triangulate,
};
use geomkit_common::write_obj;

#[derive(Parser)]
#[command(name = "geomkit")]
#[command(
    author,
    version,
    about = "Procedural geometry generator with handle-managed buffers"
)]
struct Args {
    #[command(subcommand)]
    shape: Shape,

    /// Grid index topology, 0-4 (overrides the config file)
    #[arg(long, short = 'l', global = true, value_parser = clap::value_parser!(u32).range(0..=4))]
    level: Option<u32>,

    /// TOML config file
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Export the triangulated mesh to this OBJ file
    #[arg(long, global = true)]
    obj: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Shape {
    /// Unit sphere
    Sphere {
        #[arg(long, default_value_t = 16)]
        slices: u32,
        #[arg(long, default_value_t = 8)]
        stacks: u32,
    },
    /// Unit quad
    Quad,
    /// Unit cube
    Cube,
    /// Cone with a strip lateral surface
    Cone {
        #[arg(long, default_value_t = 16)]
        slices: u32,
        /// Close the bottom with a disk
        #[arg(long)]
        base: bool,
    },
    /// Cone with a fan lateral surface
    FanCone {
        #[arg(long, default_value_t = 16)]
        slices: u32,
        /// Close the bottom with a disk
        #[arg(long)]
        base: bool,
    },
    /// Cylinder
    Cylinder {
        #[arg(long, default_value_t = 16)]
        slices: u32,
        /// Cap both ends
        #[arg(long)]
        base: bool,
    },
    /// Flat disk
    Disk {
        #[arg(long, default_value_t = 16)]
        slices: u32,
    },
    /// Torus
    Torus {
        #[arg(long, default_value_t = 16)]
        slices: u32,
        #[arg(long, default_value_t = 8)]
        stacks: u32,
        /// Tube radius, in (0, 1]
        #[arg(long, default_value_t = 0.25)]
        radius: f32,
    },
    /// Flat or heightmap-displaced grid
    Grid {
        #[arg(long, default_value_t = 16)]
        width: u32,
        #[arg(long, default_value_t = 16)]
        height: u32,
        /// Whitespace-separated samples, row-major
        #[arg(long)]
        heightmap: Option<PathBuf>,
    },
    /// Teapot
    Teapot {
        #[arg(long, default_value_t = 12)]
        slices: u32,
    },
}

impl Shape {
    fn into_params(self) -> Result<ShapeParams> {
        let params = match self {
            Self::Sphere { slices, stacks } => ShapeParams::Sphere { slices, stacks },
            Self::Quad => ShapeParams::Quad,
            Self::Cube => ShapeParams::Cube,
            Self::Cone { slices, base } => ShapeParams::Cone { slices, base },
            Self::FanCone { slices, base } => ShapeParams::FanCone { slices, base },
            Self::Cylinder { slices, base } => ShapeParams::Cylinder { slices, base },
            Self::Disk { slices } => ShapeParams::Disk { slices },
            Self::Torus {
                slices,
                stacks,
                radius,
            } => ShapeParams::Torus {
                slices,
                stacks,
                radius,
            },
            Self::Grid {
                width,
                height,
                heightmap,
            } => ShapeParams::Grid2d {
                width,
                height,
                heightmap: heightmap.as_deref().map(read_heightmap).transpose()?,
            },
            Self::Teapot { slices } => ShapeParams::Teapot { slices },
        };
        Ok(params)
    }
}

fn read_heightmap(path: &Path) -> Result<Vec<f32>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read heightmap {}", path.display()))?;
    content
        .split_whitespace()
        .map(|sample| {
            sample
                .parse::<f32>()
                .with_context(|| format!("Invalid heightmap sample '{sample}'"))
        })
        .collect()
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GeometryConfig::load(path)?,
        None => GeometryConfig::default(),
    };
    if let Some(level) = args.level {
        config.optimization_level = OptimizationLevel::try_from(level)?;
    }

    let params = args.shape.into_params()?;
    let mut manager = GeometryManager::new(RecordingBackend::new(), config);
    let handle = manager.generate(params)?;
    manager.draw(handle)?;

    print_statistics(&manager, handle)?;
    if let Some(path) = &args.obj {
        export_obj(&manager, handle, path)?;
    }

    manager.delete(handle)?;
    manager.teardown();
    Ok(())
}

fn print_statistics(manager: &GeometryManager<RecordingBackend>, handle: u32) -> Result<()> {
    let record = manager.record(handle)?;
    let backend = manager.backend();
    let vertices = backend
        .mesh_vertices(record.vertex_array)
        .map_or(0, |v| v.len());
    let indices = backend
        .index_data(record.vertex_array)
        .map_or(0, <[u32]>::len);
    let draws = backend.draws().count();

    println!("shape:      {}", record.kind());
    println!("handle:     {handle}");
    println!("vertices:   {vertices}");
    println!("indices:    {indices}");
    if let Some(topology) = record.shape.topology() {
        let d = topology.descriptor;
        println!(
            "topology:   level {} ({}, {} rows of {} indices)",
            topology.level, d.mode, d.row_count, d.elements_per_row
        );
    }
    println!("draw calls: {draws}");
    for call in record.draw_calls() {
        println!("  {call:?}");
    }
    Ok(())
}

fn export_obj(
    manager: &GeometryManager<RecordingBackend>,
    handle: u32,
    path: &Path,
) -> Result<()> {
    let record = manager.record(handle)?;
    let backend = manager.backend();
    let vertices = backend
        .mesh_vertices(record.vertex_array)
        .context("Geometry has no vertex data")?;
    let triangles = triangulate(
        &record.draw_calls(),
        backend.index_data(record.vertex_array),
    );

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let name = record.kind().name().replace(' ', "_");
    write_obj(&mut out, &name, &vertices, &triangles)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        "Exported {} triangles to {}",
        triangles.len(),
        path.display()
    );
    Ok(())
}
