//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::ShapeLimits;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas settings.
///
/// Controls the size of the rendered board and the color behind the shapes.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 50 - 4000)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 50 - 4000)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background color shown on the canvas and composited into JPEG exports.
    /// PNG exports always keep a transparent background.
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Random shape settings used by Add and Add+.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ShapesConfig {
    /// Fixed random seed; omit for different shapes on every run
    #[serde(default)]
    pub seed: Option<u64>,

    /// Largest random circle radius (valid range: 1 - 1000)
    #[serde(default = "default_max_circle_radius")]
    pub max_circle_radius: i32,

    /// Diamond sides are drawn as (rand(0..max_diamond_half) + 5) * 2 (valid range: 1 - 1000)
    #[serde(default = "default_max_diamond_half")]
    pub max_diamond_half: i32,

    /// Thickest random arrow shaft (valid range: 1 - 1000)
    #[serde(default = "default_max_arrow_shaft")]
    pub max_arrow_shaft: i32,

    /// Arrows are 4x their shaft plus up to this many pixels long (valid range: 1 - 1000)
    #[serde(default = "default_max_arrow_extra_length")]
    pub max_arrow_extra_length: i32,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_circle_radius: default_max_circle_radius(),
            max_diamond_half: default_max_diamond_half(),
            max_arrow_shaft: default_max_arrow_shaft(),
            max_arrow_extra_length: default_max_arrow_extra_length(),
        }
    }
}

impl ShapesConfig {
    pub fn limits(&self) -> ShapeLimits {
        ShapeLimits {
            max_circle_radius: self.max_circle_radius,
            max_diamond_half: self.max_diamond_half,
            max_arrow_shaft: self.max_arrow_shaft,
            max_arrow_extra_length: self.max_arrow_extra_length,
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (created when missing)
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,

    /// Exported files are named `<file_prefix><n>.<ext>`, counting from 1
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_prefix: default_file_prefix(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    600
}

fn default_canvas_height() -> i32 {
    450
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_max_circle_radius() -> i32 {
    100
}

fn default_max_diamond_half() -> i32 {
    100
}

fn default_max_arrow_shaft() -> i32 {
    75
}

fn default_max_arrow_extra_length() -> i32 {
    75
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_prefix() -> String {
    "image".to_string()
}

fn default_jpeg_quality() -> u8 {
    90
}
