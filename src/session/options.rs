use crate::config::Config;
use crate::draw::{Color, ShapeFactory, ShapeLimits};
use crate::export::ExportSettings;
use std::path::PathBuf;

/// Runtime options for an editing session, derived from configuration and
/// command-line overrides.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub background: Color,
    /// Fixed seed for random shapes; `None` seeds from the OS
    pub seed: Option<u64>,
    pub limits: ShapeLimits,
    pub export: ExportSettings,
}

impl SessionOptions {
    /// Replaces the random seed when one is given.
    pub fn override_seed(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
    }

    /// Replaces the export directory when one is given.
    pub fn override_export_dir(&mut self, directory: Option<PathBuf>) {
        if let Some(directory) = directory {
            self.export.file.save_directory = directory;
        }
    }

    pub(crate) fn shape_factory(&self) -> ShapeFactory {
        match self.seed {
            Some(seed) => ShapeFactory::seeded(seed, self.limits),
            None => ShapeFactory::from_entropy(self.limits),
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        options_from_config(&Config::default())
    }
}

/// Builds session options from a loaded configuration.
pub fn options_from_config(config: &Config) -> SessionOptions {
    SessionOptions {
        canvas_width: config.canvas.width,
        canvas_height: config.canvas.height,
        background: config.canvas.background.to_color(),
        seed: config.shapes.seed,
        limits: config.shapes.limits(),
        export: ExportSettings::from_config(config),
    }
}
