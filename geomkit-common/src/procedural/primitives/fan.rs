//! Fan- and strip-based primitives (cone, fan cone, cylinder, disk)
//!
//! Every cap is a disk fan: one centre vertex followed by `slices + 1` rim
//! vertices, the last rim vertex closing the loop on the first. Rim texture
//! coordinates project the unit circle onto the border of the unit square,
//! one tangent formula per quarter turn.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use super::{require_subdivision, vertex_count};
use crate::error::GenerateError;
use crate::procedural::types::MeshVertex;

/// How rim normals of a disk fan are derived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RimNormal {
    /// Axis-aligned, same as the centre vertex
    Flat,
    /// Slant of a unit cone of height 2: `(2x, 1, 2z) / √5`
    ConeSlant,
}

/// Slant normal of a height-2, radius-1 cone at rim point `(x, ·, z)`
fn cone_slant_normal(x: f64, z: f64) -> [f64; 3] {
    let inv_sqrt5 = 1.0 / 5f64.sqrt();
    [2.0 * x * inv_sqrt5, inv_sqrt5, 2.0 * z * inv_sqrt5]
}

/// Square-border texture coordinate for rim angle `phi` in `[0, 2π]`
///
/// The mapping is discontinuous at the quarter boundaries (π/4, 3π/4, ...),
/// where neighbouring formulas disagree. Existing textures are authored
/// against it, so the seams stay.
pub(crate) fn rim_uv(phi: f64) -> [f64; 2] {
    if phi < FRAC_PI_4 || phi > 7.0 * FRAC_PI_4 {
        [1.0, 0.5 + phi.tan() / 2.0]
    } else if phi < 3.0 * FRAC_PI_4 {
        [0.5 - (phi - FRAC_PI_2).tan() / 2.0, 1.0]
    } else if phi < 5.0 * FRAC_PI_4 {
        [0.0, 0.5 - phi.tan() / 2.0]
    } else {
        [0.5 + (phi - FRAC_PI_2).tan() / 2.0, 0.0]
    }
}

/// Append a disk fan with its centre at height `centre_y` and its rim at `rim_y`
///
/// A negative centre height winds the rim the other way so the fan faces -Y.
fn push_disk_fan(
    out: &mut Vec<MeshVertex>,
    centre_y: f64,
    rim_y: f64,
    slices: u32,
    rim_normal: RimNormal,
) {
    let sens = if centre_y < 0.0 { -1.0 } else { 1.0 };
    let step = TAU / slices as f64;

    out.push(MeshVertex::from_f64(
        [0.0, centre_y, 0.0],
        [0.0, sens, 0.0],
        [0.5, 0.5],
    ));

    for j in 0..=slices {
        let phi = j as f64 * step;
        let x = -(sens * phi).cos();
        let z = (sens * phi).sin();
        let normal = match rim_normal {
            RimNormal::Flat => [0.0, sens, 0.0],
            RimNormal::ConeSlant => cone_slant_normal(x, z),
        };
        out.push(MeshVertex::from_f64([x, rim_y, z], normal, rim_uv(phi)));
    }
}

/// Generate a cone of height 2 and radius 1, apex at `y = 1`
///
/// The lateral surface is a strip of `slices + 1` apex/rim pairs; the apex is
/// repeated per pair so each pair carries its own texture column. With
/// `base`, a downward-facing disk fan of `slices + 2` vertices follows.
pub fn cone_vertices(slices: u32, base: bool) -> Result<Vec<MeshVertex>, GenerateError> {
    require_subdivision("cone", "slices", slices)?;
    let count = vertex_count("cone", cone_vertex_count(slices, base))?;

    let step = TAU / slices as f64;
    let mut vertices = Vec::with_capacity(count);

    for j in 0..=slices {
        let s = j as f64 / slices as f64;
        let phi = j as f64 * step;
        let (x, z) = (-phi.cos(), phi.sin());

        vertices.push(MeshVertex::from_f64(
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [s, 1.0],
        ));
        vertices.push(MeshVertex::from_f64(
            [x, -1.0, z],
            cone_slant_normal(x, z),
            [s, 0.0],
        ));
    }

    if base {
        push_disk_fan(&mut vertices, -1.0, -1.0, slices, RimNormal::Flat);
    }

    Ok(vertices)
}

/// Generate a cone whose lateral surface is a single fan around the apex
///
/// `slices + 2` vertices, plus the same again for the base when `base` is set.
pub fn fan_cone_vertices(slices: u32, base: bool) -> Result<Vec<MeshVertex>, GenerateError> {
    require_subdivision("fan cone", "slices", slices)?;
    let fans = if base { 2 } else { 1 };
    let count = vertex_count(
        "fan cone",
        slices.checked_add(2).and_then(|n| n.checked_mul(fans)),
    )?;

    let mut vertices = Vec::with_capacity(count);
    push_disk_fan(&mut vertices, 1.0, -1.0, slices, RimNormal::ConeSlant);
    if base {
        push_disk_fan(&mut vertices, -1.0, -1.0, slices, RimNormal::Flat);
    }

    Ok(vertices)
}

/// Generate an open or capped cylinder of height 2 and radius 1
///
/// The side is a strip of `slices + 1` top/bottom pairs. Side vertices share
/// the cone slant normal, so lighting matches a cone with the same rim.
/// With `base`, a top fan and a bottom fan follow, `slices + 2` vertices each.
pub fn cylinder_vertices(slices: u32, base: bool) -> Result<Vec<MeshVertex>, GenerateError> {
    require_subdivision("cylinder", "slices", slices)?;
    let count = vertex_count("cylinder", cylinder_vertex_count(slices, base))?;

    let step = TAU / slices as f64;
    let mut vertices = Vec::with_capacity(count);

    for j in 0..=slices {
        let s = j as f64 / slices as f64;
        let phi = j as f64 * step;
        let (x, z) = (-phi.cos(), phi.sin());
        let normal = cone_slant_normal(x, z);

        vertices.push(MeshVertex::from_f64([x, 1.0, z], normal, [s, 1.0]));
        vertices.push(MeshVertex::from_f64([x, -1.0, z], normal, [s, 0.0]));
    }

    if base {
        push_disk_fan(&mut vertices, 1.0, 1.0, slices, RimNormal::Flat);
        push_disk_fan(&mut vertices, -1.0, -1.0, slices, RimNormal::Flat);
    }

    Ok(vertices)
}

/// Generate a unit disk in the XZ plane facing +Y
///
/// `slices + 2` vertices drawn as one triangle fan.
pub fn disk_vertices(slices: u32) -> Result<Vec<MeshVertex>, GenerateError> {
    require_subdivision("disk", "slices", slices)?;
    let count = vertex_count("disk", slices.checked_add(2))?;

    let mut vertices = Vec::with_capacity(count);
    push_disk_fan(&mut vertices, 0.0, 0.0, slices, RimNormal::Flat);

    Ok(vertices)
}

/// Lateral strip plus the optional base fan
fn cone_vertex_count(slices: u32, base: bool) -> Option<u32> {
    let lateral = slices.checked_add(1)?.checked_mul(2)?;
    let cap = if base { slices.checked_add(2)? } else { 0 };
    lateral.checked_add(cap)
}

/// Side strip plus the optional top and bottom fans
fn cylinder_vertex_count(slices: u32, base: bool) -> Option<u32> {
    let lateral = slices.checked_add(1)?.checked_mul(2)?;
    let caps = if base {
        slices.checked_add(2)?.checked_mul(2)?
    } else {
        0
    };
    lateral.checked_add(caps)
}
