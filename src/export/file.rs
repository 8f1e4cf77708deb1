//! File saving functionality for exported images.

use super::types::{ExportError, ExportFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Leading part of every file name.
    pub file_prefix: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: PathBuf::from("."),
            file_prefix: "image".to_string(),
        }
    }
}

/// Generate a filename from the prefix, a running index and the format.
///
/// `generate_filename("image", 3, ExportFormat::Png)` is `image3.png`.
pub fn generate_filename(prefix: &str, index: u32, format: ExportFormat) -> String {
    format!("{}{}.{}", prefix, index, format.extension())
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image data under `filename` in the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_image(
    image_data: &[u8],
    config: &FileSaveConfig,
    filename: &str,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = directory.join(filename);

    log::info!(
        "Saving image to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
