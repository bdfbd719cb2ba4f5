//! Source image loading and PNG export

use crate::io::configuration::MAX_IMAGE_FILE_BYTES;
use crate::io::error::{Result, TypocutError, invalid_parameter};
use image::{ImageFormat, RgbaImage};
use log::{info, warn};
use std::path::Path;

/// Reject files larger than `limit` bytes
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read or the file is too large
pub fn check_file_size(path: &Path, limit: u64) -> Result<()> {
    let size = std::fs::metadata(path)
        .map_err(|e| TypocutError::FileSystem {
            path: path.to_path_buf(),
            operation: "read metadata",
            source: e,
        })?
        .len();
    if size > limit {
        return Err(invalid_parameter(
            "file size",
            &format!("{} ({size} bytes)", path.display()),
            &format!("exceeds the {limit} byte limit"),
        ));
    }
    Ok(())
}

/// Load an image file as RGBA
///
/// # Errors
///
/// Returns an error if the file is too large, cannot be decoded, or has a zero dimension
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    check_file_size(path, MAX_IMAGE_FILE_BYTES)?;
    let image = image::open(path)
        .map_err(|e| TypocutError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(invalid_parameter(
            "image",
            &path.display(),
            &"image has a zero dimension",
        ));
    }
    Ok(image)
}

/// Load every readable image, skipping failures with a warning
pub fn load_images<P: AsRef<Path>>(paths: &[P]) -> Vec<RgbaImage> {
    paths
        .iter()
        .filter_map(|path| match load_image(path.as_ref()) {
            Ok(image) => Some(image),
            Err(err) => {
                warn!("Skipping image: {err}");
                None
            }
        })
        .collect()
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be written
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TypocutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create output directory",
            source: e,
        })?;
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| TypocutError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;
    info!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
