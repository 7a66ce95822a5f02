//! Error types for the geometry manager and its configuration

use std::path::PathBuf;

use geomkit_common::GenerateError;

/// Errors returned by [`GeometryManager`](crate::GeometryManager) operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Handle is zero, out of range, never allocated or already deleted
    #[error("invalid geometry handle {0}")]
    InvalidHandle(u32),

    /// Shape parameters were rejected before anything was allocated
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Errors raised while loading or saving a [`GeometryConfig`](crate::GeometryConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Handle table must start with at least one slot
    #[error("initial_capacity must be at least 1")]
    ZeroCapacity,
}
