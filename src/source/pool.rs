//! Gradient and uploaded image pools with active-source switching

use crate::io::configuration::MAX_UPLOADED_IMAGES;
use crate::source::gradient::gradient_set;
use image::RgbaImage;
use log::{debug, warn};

/// Which image collection tiles draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ImageSource {
    /// Procedural gradients
    #[default]
    Gradients,
    /// User-supplied images
    Uploaded,
}

/// Owns both image collections and tracks which one is active
///
/// Images are read-only once in the pool; tiles refer to them by index.
#[derive(Debug, Clone)]
pub struct ImagePool {
    gradients: Vec<RgbaImage>,
    uploaded: Vec<RgbaImage>,
    source: ImageSource,
    colors: ([u8; 3], [u8; 3]),
}

impl ImagePool {
    /// Create a pool with freshly generated gradients and no uploads
    pub fn new(start: [u8; 3], end: [u8; 3]) -> Self {
        Self {
            gradients: gradient_set(start, end),
            uploaded: Vec::new(),
            source: ImageSource::Gradients,
            colors: (start, end),
        }
    }

    /// Regenerate gradients if either color changed
    ///
    /// Returns whether the gradients were regenerated.
    pub fn set_colors(&mut self, start: [u8; 3], end: [u8; 3]) -> bool {
        if self.colors == (start, end) {
            return false;
        }
        debug!("Regenerating gradients for {start:?} -> {end:?}");
        self.gradients = gradient_set(start, end);
        self.colors = (start, end);
        true
    }

    /// Replace the uploaded collection
    ///
    /// Images with a zero dimension are dropped and at most
    /// `MAX_UPLOADED_IMAGES` are kept. Returns the number kept.
    pub fn set_uploaded(&mut self, images: Vec<RgbaImage>) -> usize {
        let offered = images.len();
        let mut kept: Vec<RgbaImage> = images
            .into_iter()
            .filter(|image| {
                let valid = image.width() > 0 && image.height() > 0;
                if !valid {
                    warn!("Dropping empty uploaded image");
                }
                valid
            })
            .collect();
        if kept.len() > MAX_UPLOADED_IMAGES {
            warn!(
                "Keeping the first {MAX_UPLOADED_IMAGES} of {} uploaded images",
                kept.len()
            );
            kept.truncate(MAX_UPLOADED_IMAGES);
        }
        debug!("Uploaded pool holds {} of {offered} images", kept.len());
        self.uploaded = kept;
        if self.uploaded.is_empty() && self.source == ImageSource::Uploaded {
            self.source = ImageSource::Gradients;
        }
        self.uploaded.len()
    }

    /// Switch the active collection
    ///
    /// Selecting uploads while none are loaded keeps gradients active.
    /// Returns the source that is active afterwards.
    pub fn select(&mut self, source: ImageSource) -> ImageSource {
        self.source = if source == ImageSource::Uploaded && self.uploaded.is_empty() {
            warn!("No uploaded images available, using gradients");
            ImageSource::Gradients
        } else {
            source
        };
        self.source
    }

    /// Currently active source
    pub const fn source(&self) -> ImageSource {
        self.source
    }

    /// Images eligible for assignment
    pub fn active(&self) -> &[RgbaImage] {
        match self.source {
            ImageSource::Gradients => &self.gradients,
            ImageSource::Uploaded => &self.uploaded,
        }
    }

    /// Number of active images
    pub fn len(&self) -> usize {
        self.active().len()
    }

    /// Whether the active collection is empty
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    /// Active image at `index`
    pub fn get(&self, index: usize) -> Option<&RgbaImage> {
        self.active().get(index)
    }

    /// Clamp an image index to the active collection, falling back to 0
    pub fn clamp_index(&self, index: usize) -> usize {
        if index < self.len() { index } else { 0 }
    }
}
