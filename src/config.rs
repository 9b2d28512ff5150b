//! Demo configuration, read from TOML. Every field is optional; the
//! defaults reproduce the behaviour of the built-in tour.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domains::delivery::TransportMode;
use crate::error::ConfigError;
use crate::registry::FallbackPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// What an unknown furniture style produces.
    pub furniture_fallback: FallbackPolicy,
    /// Theme family used for unknown platforms.
    pub theme_default: String,
    /// Order kind used for unknown order types.
    pub order_default: TransportMode,
    /// What an unknown house plan produces.
    pub house_fallback: FallbackPolicy,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            furniture_fallback: FallbackPolicy::Base,
            theme_default: "Mac".to_string(),
            order_default: TransportMode::Air,
            house_fallback: FallbackPolicy::Base,
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), ?config, "loaded demo config");
        Ok(config)
    }
}
