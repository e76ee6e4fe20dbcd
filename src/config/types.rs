use serde::{Deserialize, Serialize};

use crate::atlas::DEFAULT_PADDING;

/// Config file version this build understands
pub const CONFIG_VERSION: u32 = 1;

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Configuration file structure.
///
/// Paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Config file version, must equal [`CONFIG_VERSION`]
    pub version: u32,
    /// Folder containing the sprite images
    pub input: Option<String>,
    /// Output directory for atlas files
    pub output_dir: String,
    /// Base name for output files (atlas.png, atlas.json)
    pub name: String,
    /// Padding between sprites in pixels
    pub padding: u32,
    /// Pivot token: "C", "TL" or "BC"
    pub pivot: String,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            input: None,
            output_dir: ".".to_string(),
            name: "atlas".to_string(),
            padding: DEFAULT_PADDING,
            pivot: "C".to_string(),
            compress: None,
        }
    }
}
