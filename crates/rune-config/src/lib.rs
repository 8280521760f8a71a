//! Rune configuration system
//!
//! Loads display and asset settings from `rune.toml`, with environment
//! variables taking precedence over the file.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuneConfig {
    /// Display density settings
    pub display: DisplayConfig,
    /// Asset lookup settings
    pub assets: AssetConfig,
}

/// Display density configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Platform scale factor (logical→physical). `None` means 1.
    pub scale_factor: Option<f32>,
    /// Extra user UI scale applied on top of the platform factor
    pub ui_scale: f32,
    /// Map authored logical pixels to physical pixels (default: true)
    pub logical_pixels: bool,
}

/// Asset lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory that relative asset paths are resolved against
    pub root: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scale_factor: None,
            ui_scale: 1.0,
            logical_pixels: true,
        }
    }
}

impl AssetConfig {
    /// Join `path` under the configured root, if any.
    pub fn resolve(&self, path: &str) -> String {
        match &self.root {
            Some(root) => root.join(path).to_string_lossy().into_owned(),
            None => path.to_owned(),
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

fn parse_f32(name: &str, val: &str) -> Option<f32> {
    match val.parse::<f32>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("ignoring {}={:?}: {}", name, val, e);
            None
        }
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(RuneConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load `rune.toml` from the current directory, or defaults if it is
    /// missing or invalid
    pub fn load_or_default() -> Self {
        match Self::load_from_file("rune.toml") {
            Ok(config) => config,
            Err(e) => {
                debug!("using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RUNE_SCALE_FACTOR") {
            if let Some(v) = parse_f32("RUNE_SCALE_FACTOR", &val) {
                self.display.scale_factor = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RUNE_UI_SCALE") {
            if let Some(v) = parse_f32("RUNE_UI_SCALE", &val) {
                self.display.ui_scale = v;
            }
        }
        if let Ok(val) = std::env::var("RUNE_LOGICAL_PIXELS") {
            self.display.logical_pixels = parse_flag(&val);
        }
        if let Ok(root) = std::env::var("RUNE_ASSET_ROOT") {
            self.assets.root = Some(PathBuf::from(root));
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
