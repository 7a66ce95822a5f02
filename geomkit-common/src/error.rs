//! Generation error types.

/// Errors raised while validating shape parameters.
///
/// Every generator validates its inputs before producing any data, so an
/// error here means nothing was generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Grid topologies need at least two vertices along each axis
    #[error("grid of {width}x{height} vertices is too small (need at least 2x2)")]
    GridTooSmall { width: u32, height: u32 },

    /// Heightmap does not hold one sample per grid vertex
    #[error("heightmap has {actual} samples, expected {expected}")]
    HeightmapSize { expected: usize, actual: usize },

    /// Slices, stacks or similar subdivision count is zero
    #[error("{shape}: {param} must be at least 1")]
    ZeroSubdivision {
        shape: &'static str,
        param: &'static str,
    },

    /// Vertex, index or byte counts would not fit in `u32`
    #[error("{shape}: too large (vertex, index or byte count overflows u32)")]
    TooLarge { shape: &'static str },

    /// Torus tube radius must lie in (0, 1]
    #[error("torus radius {0} out of range (must be in (0, 1])")]
    TorusRadius(f32),

    /// Optimization level outside 0-4
    #[error("invalid optimization level {0} (must be 0-4)")]
    InvalidOptimizationLevel(u32),
}
