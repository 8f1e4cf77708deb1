use crate::config::Config;
use crate::draw::{Color, Shape};
use crate::export::{
    dependencies::ExportDependencies,
    encode::{encode_surface, render_image},
    file::{FileSaveConfig, expand_tilde, generate_filename},
    types::{ExportError, ExportFormat, ExportOutcome},
};
use std::path::PathBuf;

/// Everything an export needs besides the shapes themselves.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub width: i32,
    pub height: i32,
    /// Composited behind the shapes in JPEG exports
    pub background: Color,
    pub jpeg_quality: u8,
    pub file: FileSaveConfig,
}

impl ExportSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.canvas.width,
            height: config.canvas.height,
            background: config.canvas.background.to_color(),
            jpeg_quality: config.export.jpeg_quality,
            file: FileSaveConfig {
                save_directory: expand_tilde(&config.export.directory),
                file_prefix: config.export.file_prefix.clone(),
            },
        }
    }
}

/// Writes numbered image files of the board.
///
/// Files are named `<prefix><n>.<ext>` with `n` counting up from 1 across
/// both formats; the counter only advances when a file was written.
pub struct ExportManager {
    settings: ExportSettings,
    dependencies: ExportDependencies,
    next_index: u32,
    last_outcome: Option<ExportOutcome>,
}

impl ExportManager {
    /// Create a new export manager writing to the local file system.
    pub fn new(settings: ExportSettings) -> Self {
        Self::with_dependencies(settings, ExportDependencies::default())
    }

    /// Create an export manager with custom dependencies (useful for testing).
    pub fn with_dependencies(settings: ExportSettings, dependencies: ExportDependencies) -> Self {
        Self {
            settings,
            dependencies,
            next_index: 1,
            last_outcome: None,
        }
    }

    /// Index the next successful export will use.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    pub fn last_outcome(&self) -> Option<&ExportOutcome> {
        self.last_outcome.as_ref()
    }

    /// Renders `shapes` and saves them in `format`.
    pub fn export(&mut self, shapes: &[Shape], format: ExportFormat) -> ExportOutcome {
        log::debug!(
            "Exporting {} shapes as {} (index {})",
            shapes.len(),
            format,
            self.next_index
        );
        let outcome = match self.try_export(shapes, format) {
            Ok(path) => {
                log::info!("Export successful: {}", path.display());
                self.next_index += 1;
                ExportOutcome::Success(path)
            }
            Err(e) => {
                let error_message = e.to_string();
                log::error!("Export failed: {}", error_message);
                ExportOutcome::Failed(error_message)
            }
        };
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn try_export(&self, shapes: &[Shape], format: ExportFormat) -> Result<PathBuf, ExportError> {
        let background = match format {
            ExportFormat::Png => None,
            ExportFormat::Jpeg => Some(self.settings.background),
        };
        let mut surface = render_image(
            shapes,
            self.settings.width,
            self.settings.height,
            background,
        )?;
        let bytes = encode_surface(&mut surface, format, self.settings.jpeg_quality)?;
        let filename = generate_filename(&self.settings.file.file_prefix, self.next_index, format);
        self.dependencies
            .saver
            .save(&bytes, &self.settings.file, &filename)
    }
}
