//! Geometry manager configuration (TOML)
//!
//! Missing keys take their defaults, so an empty file is a valid config.

use std::path::Path;

use geomkit_common::OptimizationLevel;
use serde::{Deserialize, Serialize};

use super::handle_table::DEFAULT_INITIAL_CAPACITY;
use crate::error::ConfigError;

/// Settings for a [`GeometryManager`](crate::GeometryManager)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Index topology for sphere, torus and grid (default: 1, range: 0-4)
    #[serde(default)]
    pub optimization_level: OptimizationLevel,
    /// Pre-populated handle table slots (default: 256, minimum: 1)
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            optimization_level: OptimizationLevel::default(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl GeometryConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to a TOML file, replacing any existing one
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
