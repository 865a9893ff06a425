//! Graph configuration
//!
//! A `GraphConfig` fixes the direction mode of a store and the weight used by
//! `add_edge` when none is given. It can be built in code or loaded from YAML:
//!
//! ```rust,ignore
//! use sparsegnn_core::config::GraphConfig;
//!
//! let config = GraphConfig::default().directed(true).default_weight(0.5);
//! let config = GraphConfig::from_yaml("graph.yaml")?;
//! ```
//!
//! ```yaml
//! directed: true
//! default_weight: 0.5
//! ```

pub mod error;

pub use error::{ConfigError, ConfigResult};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weight assigned by `add_edge` when no explicit weight is supplied
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Store construction settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Directed graphs store edges exactly as added
    pub directed: bool,

    /// Weight used by `add_edge`
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

impl GraphConfig {
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Reject settings a store cannot honor
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.default_weight.is_finite() {
            return Err(ConfigError::InvalidDefaultWeight(self.default_weight));
        }
        Ok(())
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: GraphConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
