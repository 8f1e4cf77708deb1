//! Data types for image export.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Image format to export the board as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless with a transparent background.
    Png,
    /// Lossy with the canvas background composited in.
    Jpeg,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            other => Err(format!("unknown export format '{other}' (expected png or jpeg)")),
        }
    }
}

/// Outcome of an export request (success or failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Success(PathBuf),
    Failed(String),
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Success(_))
    }
}

/// Errors that can occur while exporting an image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to save image: {0}")]
    SaveError(#[from] std::io::Error),

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Image encoding failed: {0}")]
    EncodeError(String),
}

impl From<cairo::Error> for ExportError {
    fn from(err: cairo::Error) -> Self {
        ExportError::RenderError(err.to_string())
    }
}
