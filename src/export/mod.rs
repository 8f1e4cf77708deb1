//! Image export of the drawing board.
//!
//! This module provides:
//! - Off-screen rendering of the shape stack
//! - PNG encoding with a transparent background
//! - JPEG encoding with the canvas background composited in
//! - Numbered file naming and saving

pub mod encode;
pub mod file;
pub mod types;

mod dependencies;
mod manager;

pub use dependencies::{ExportDependencies, ExportFileSaver};
pub use file::FileSaveConfig;
pub use manager::{ExportManager, ExportSettings};
pub use types::{ExportError, ExportFormat, ExportOutcome};
