//! Font file loading for the built-in and uploaded font collections

use crate::glyph::font::{GlyphFont, OutlineFont};
use crate::io::configuration::{FONT_EXTENSIONS, MAX_FONT_FILE_BYTES, MAX_UPLOADED_FONTS};
use crate::io::error::{Result, TypocutError};
use crate::io::image::check_file_size;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Whether a path has a font file extension
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Load one font file
///
/// # Errors
///
/// Returns an error if the file is too large, unreadable, or not a valid font
pub fn load_font_file(path: &Path) -> Result<OutlineFont> {
    check_file_size(path, MAX_FONT_FILE_BYTES)?;
    let bytes = std::fs::read(path).map_err(|e| TypocutError::FileSystem {
        path: path.to_path_buf(),
        operation: "read font",
        source: e,
    })?;
    let name = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().to_string());
    OutlineFont::from_bytes(name, &bytes).map_err(|err| match err {
        TypocutError::FontLoad { reason, .. } => TypocutError::FontLoad {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })
}

/// Load uploaded fonts, keeping at most `MAX_UPLOADED_FONTS`
///
/// Files that fail to load are skipped with a warning.
pub fn load_uploaded_fonts<P: AsRef<Path>>(paths: &[P]) -> Vec<Arc<dyn GlyphFont>> {
    if paths.len() > MAX_UPLOADED_FONTS {
        warn!(
            "Only the first {MAX_UPLOADED_FONTS} of {} fonts are loaded",
            paths.len()
        );
    }
    paths
        .iter()
        .take(MAX_UPLOADED_FONTS)
        .filter_map(|path| load_or_warn(path.as_ref()))
        .collect()
}

/// Load every font file in a directory, sorted by file name
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn load_font_dir(dir: &Path) -> Result<Vec<Arc<dyn GlyphFont>>> {
    let entries = std::fs::read_dir(dir).map_err(|e| TypocutError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read font directory",
        source: e,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && is_font_file(path))
        .collect();
    paths.sort();
    debug!("Found {} font files in {}", paths.len(), dir.display());
    Ok(paths.iter().filter_map(|path| load_or_warn(path)).collect())
}

fn load_or_warn(path: &Path) -> Option<Arc<dyn GlyphFont>> {
    match load_font_file(path) {
        Ok(font) => Some(Arc::new(font)),
        Err(err) => {
            warn!("Skipping font: {err}");
            None
        }
    }
}
