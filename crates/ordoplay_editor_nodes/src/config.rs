// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor configuration.
//!
//! Geometry metrics, stacking values and prompt text, loadable from RON:
//!
//! ```ron
//! (
//!     node_width: 200.0,
//!     port_height: 24.0,
//!     add_node_label: "Insert node",
//! )
//! ```
//!
//! Missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid RON for this configuration
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Serializing the configuration failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Node editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum node width
    pub node_width: f32,
    /// Height of the title bar
    pub header_height: f32,
    /// Vertical distance between ports
    pub port_height: f32,
    /// Drawn port radius
    pub port_radius: f32,
    /// Hit radius as a multiple of `port_radius`
    pub port_hit_factor: f32,
    /// Side of the square resize handle in the bottom-right corner
    pub resize_handle_size: f32,
    /// Horizontal gap between port columns and the embedded widget
    pub widget_padding: f32,
    /// Stacking order of nodes at rest
    pub base_z: f32,
    /// Stacking order of the hovered node
    pub hovered_z: f32,
    /// Text of the choice offered when a draft is dropped on empty canvas
    pub add_node_label: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            header_height: 24.0,
            port_height: 22.0,
            port_radius: 6.0,
            port_hit_factor: 1.5,
            resize_handle_size: 10.0,
            widget_padding: 12.0,
            base_z: 0.0,
            hovered_z: 1.0,
            add_node_label: "Add node here".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&content)?;
        tracing::debug!("Loaded editor config from {:?}", path);
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default().struct_names(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Hit radius around a port center
    pub fn port_hit_radius(&self) -> f32 {
        self.port_radius * self.port_hit_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = EditorConfig::from_ron("(node_width: 240.0, add_node_label: \"Insert\")").unwrap();
        assert_eq!(config.node_width, 240.0);
        assert_eq!(config.add_node_label, "Insert");
        assert_eq!(config.port_height, EditorConfig::default().port_height);
    }

    #[test]
    fn test_serialization() {
        let config = EditorConfig {
            hovered_z: 5.0,
            ..EditorConfig::default()
        };
        let text = config.to_ron().unwrap();
        let loaded = EditorConfig::from_ron(&text).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(EditorConfig::from_ron("(node_width: \"wide\")"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = EditorConfig::load(Path::new("/nonexistent/editor.ron"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_hit_radius() {
        let config = EditorConfig::default();
        assert_eq!(config.port_hit_radius(), 9.0);
    }
}
