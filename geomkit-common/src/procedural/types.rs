//! Procedural vertex types
//!
//! Shared types for procedural vertex generation. Every vertex type is
//! `#[repr(C)]` and `Pod`, so a generated `Vec` casts to the flat `f32`
//! attribute array the graphics backend uploads.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Interleaved vertex: position, normal, texture coordinate (8 floats)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Create a vertex from its three attributes
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Create a vertex from `f64` components, rounding once to `f32`
    pub(crate) fn from_f64(position: [f64; 3], normal: [f64; 3], uv: [f64; 2]) -> Self {
        Self {
            position: position.map(|c| c as f32),
            normal: normal.map(|c| c as f32),
            uv: uv.map(|c| c as f32),
        }
    }

    /// Position as a glam vector
    #[inline]
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a glam vector
    #[inline]
    pub fn normal_vec(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Sphere vertex: position and texture coordinate only (5 floats)
///
/// The unit sphere's normal equals its position, so the layout binds the
/// position stream a second time as the normal attribute.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl From<SphereVertex> for MeshVertex {
    /// Expand to the interleaved layout, using the position as the normal
    fn from(v: SphereVertex) -> Self {
        Self {
            position: v.position,
            normal: v.position,
            uv: v.uv,
        }
    }
}

/// Attribute layout of a flat vertex buffer, in floats
///
/// Attribute 0 is the position, 1 the normal and 2 the texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    /// Floats per vertex
    pub stride: u32,
    /// Offset of the 3-float position
    pub position_offset: u32,
    /// Offset of the 3-float normal
    pub normal_offset: u32,
    /// Offset of the 2-float texture coordinate
    pub uv_offset: u32,
}

impl VertexLayout {
    /// `{position.xyz, normal.xyz, texcoord.uv}`, stride 8
    pub const INTERLEAVED: Self = Self {
        stride: 8,
        position_offset: 0,
        normal_offset: 3,
        uv_offset: 6,
    };

    /// `{position.xyz, texcoord.uv}`, stride 5, normal read from the position
    pub const SPHERE: Self = Self {
        stride: 5,
        position_offset: 0,
        normal_offset: 0,
        uv_offset: 3,
    };

    /// Stride in bytes
    pub const fn stride_bytes(&self) -> u32 {
        self.stride * 4
    }

    /// Number of whole vertices in a flat buffer of `floats` floats
    pub const fn vertex_count(&self, floats: usize) -> usize {
        floats / self.stride as usize
    }
}
