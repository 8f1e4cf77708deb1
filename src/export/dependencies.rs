use std::path::PathBuf;
use std::sync::Arc;

use crate::export::{
    file::{self, FileSaveConfig},
    types::ExportError,
};

/// Abstraction over file saving for exported images.
pub trait ExportFileSaver: Send + Sync {
    fn save(
        &self,
        image_data: &[u8],
        config: &FileSaveConfig,
        filename: &str,
    ) -> Result<PathBuf, ExportError>;
}

/// Bundle of dependencies used by the export manager. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub saver: Arc<dyn ExportFileSaver>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            saver: Arc::new(DefaultFileSaver),
        }
    }
}

struct DefaultFileSaver;

impl ExportFileSaver for DefaultFileSaver {
    fn save(
        &self,
        image_data: &[u8],
        config: &FileSaveConfig,
        filename: &str,
    ) -> Result<PathBuf, ExportError> {
        file::save_image(image_data, config, filename)
    }
}
