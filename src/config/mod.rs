//! Configuration file support for shapeboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapeboard/config.toml`. Settings cover the canvas, the random
//! shapes created by the Add actions, and image export.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, ExportConfig, ShapesConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CANVAS_SIZE_RANGE: (i32, i32) = (50, 4000);
const SHAPE_LIMIT_RANGE: (i32, i32) = (1, 1000);
const JPEG_QUALITY_RANGE: (u8, u8) = (1, 100);

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 600
/// height = 450
/// background = "white"
///
/// [shapes]
/// seed = 42
/// max_circle_radius = 100
///
/// [export]
/// directory = "exports"
/// file_prefix = "image"
/// jpeg_quality = 90
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Random shape sizes and seed
    #[serde(default)]
    pub shapes: ShapesConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,
}

fn clamp_i32(name: &str, value: &mut i32, (min, max): (i32, i32)) {
    if !(min..=max).contains(&*value) {
        warn!("Invalid {name} {value}, clamping to {min}-{max} range");
        *value = (*value).clamp(min, max);
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 50 - 4000
    /// - `shapes.max_*`: 1 - 1000
    /// - `export.jpeg_quality`: 1 - 100
    pub fn validate_and_clamp(&mut self) {
        clamp_i32("canvas width", &mut self.canvas.width, CANVAS_SIZE_RANGE);
        clamp_i32("canvas height", &mut self.canvas.height, CANVAS_SIZE_RANGE);

        clamp_i32(
            "max_circle_radius",
            &mut self.shapes.max_circle_radius,
            SHAPE_LIMIT_RANGE,
        );
        clamp_i32(
            "max_diamond_half",
            &mut self.shapes.max_diamond_half,
            SHAPE_LIMIT_RANGE,
        );
        clamp_i32(
            "max_arrow_shaft",
            &mut self.shapes.max_arrow_shaft,
            SHAPE_LIMIT_RANGE,
        );
        clamp_i32(
            "max_arrow_extra_length",
            &mut self.shapes.max_arrow_extra_length,
            SHAPE_LIMIT_RANGE,
        );

        let (min_q, max_q) = JPEG_QUALITY_RANGE;
        if !(min_q..=max_q).contains(&self.export.jpeg_quality) {
            warn!(
                "Invalid jpeg_quality {}, clamping to {min_q}-{max_q} range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(min_q, max_q);
        }

        if self.export.file_prefix.contains(['/', '\\']) {
            warn!(
                "Invalid file_prefix '{}', falling back to 'image'",
                self.export.file_prefix
            );
            self.export.file_prefix = "image".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/shapeboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapeboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses a TOML document without validating it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Saves the configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, Self::example_toml())?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The documented example configuration.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
