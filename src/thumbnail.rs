//! Shot thumbnails on disk.
//!
//! A thumbnail directory holds one image per shot, named after the frame the
//! shot starts on (`1200.jpg`, `1350.jpg`, ...). [`ThumbnailSet::load`] reads
//! the native size of each image without decoding its pixels and orders the
//! set by start frame, which is also the order thumbnails are laid out in.
//!
//! # Example
//!
//! ```no_run
//! use edit_breakdown::{
//!     BreakdownError, DrawRegion, LayoutOptions, ThumbnailLayout, ThumbnailSet,
//! };
//!
//! let thumbnails = ThumbnailSet::load("shots")?;
//! let request = thumbnails.layout_request(DrawRegion::new(0, 1280, 720));
//! let layout = ThumbnailLayout::fit(&request, &LayoutOptions::default());
//! println!("{} thumbnails at {:?}", layout.len(), layout.size);
//! # Ok::<(), BreakdownError>(())
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::BreakdownError;
use crate::layout::LayoutRequest;
use crate::region::DrawRegion;

/// One shot thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    /// Location of the image file.
    pub path: PathBuf,
    /// Frame the shot starts on. Used as the ordering key.
    pub start_frame: i64,
    /// Native width in pixels.
    pub width: u32,
    /// Native height in pixels.
    pub height: u32,
}

impl ThumbnailImage {
    /// Create a thumbnail record from already-known dimensions.
    pub fn new(path: impl Into<PathBuf>, start_frame: i64, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            start_frame,
            width,
            height,
        }
    }

    /// Width divided by height, or `None` for zero-sized images.
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.width > 0 && self.height > 0).then(|| f64::from(self.width) / f64::from(self.height))
    }
}

/// The thumbnails of an edit, ordered by start frame.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct ThumbnailSet {
    /// Thumbnails in ascending start-frame order.
    pub images: Vec<ThumbnailImage>,
    /// Problems that were recovered from while loading.
    pub warnings: Vec<String>,
}

impl ThumbnailSet {
    /// Build a set from known images, sorting them by start frame.
    pub fn from_images(mut images: Vec<ThumbnailImage>) -> Self {
        images.sort_by_key(|image| image.start_frame);
        Self {
            images,
            warnings: Vec::new(),
        }
    }

    /// Scan a directory for shot thumbnails.
    ///
    /// Files the `image` crate does not recognise are ignored. Image files
    /// whose name is not a frame number are skipped and reported in
    /// [`warnings`](ThumbnailSet::warnings). A missing directory is not an
    /// error: it yields an empty set with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError::ThumbnailRead`] if an image header cannot be
    /// read, or [`BreakdownError::IoError`] if the directory cannot be listed
    /// for any reason other than not existing.
    pub fn load<P: AsRef<Path>>(directory: P) -> Result<Self, BreakdownError> {
        let directory = directory.as_ref();
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                let warning = format!(
                    "Reading thumbnail images from '{}' failed: folder does not exist.",
                    directory.display()
                );
                log::warn!("{warning}");
                return Ok(Self {
                    images: Vec::new(),
                    warnings: vec![warning],
                });
            }
            Err(error) => return Err(error.into()),
        };

        let mut images = Vec::new();
        let mut warnings = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || ImageFormat::from_path(&path).is_err() {
                log::debug!("Ignoring non-image entry {}", path.display());
                continue;
            }

            let Some(start_frame) = frame_from_file_name(&path) else {
                let warning = format!(
                    "Skipping '{}': file name is not a frame number",
                    path.display()
                );
                log::warn!("{warning}");
                warnings.push(warning);
                continue;
            };

            let (width, height) =
                image::image_dimensions(&path).map_err(|error| BreakdownError::ThumbnailRead {
                    path: path.clone(),
                    reason: error.to_string(),
                })?;
            images.push(ThumbnailImage::new(path, start_frame, width, height));
        }

        let mut set = Self::from_images(images);
        set.warnings = warnings;
        log::info!("Loaded {} images.", set.len());
        Ok(set)
    }

    /// Number of thumbnails.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the set holds no thumbnails.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Native size used for the whole layout: that of the first thumbnail.
    ///
    /// Mixed aspect ratios are not supported; the rest of the set is laid out
    /// as if it shared this size.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.images.first().map(|image| (image.width, image.height))
    }

    /// Build the packer input for this set in the given region.
    pub fn layout_request(&self, region: DrawRegion) -> LayoutRequest {
        LayoutRequest::new(region, self.len(), self.image_size().unwrap_or((0, 0)))
    }
}

/// Parse the start frame encoded in a thumbnail file name (`"1200.jpg"`).
///
/// Only the part before the first dot counts, so `"1200.v2.jpg"` is frame
/// 1200 as well.
fn frame_from_file_name(path: &Path) -> Option<i64> {
    let name = path.file_name()?.to_str()?;
    name.split('.').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::frame_from_file_name;

    #[test]
    fn frame_numbers_from_file_names() {
        assert_eq!(frame_from_file_name(Path::new("shots/1200.jpg")), Some(1200));
        assert_eq!(frame_from_file_name(Path::new("0.png")), Some(0));
        assert_eq!(frame_from_file_name(Path::new("-12.png")), Some(-12));
        assert_eq!(frame_from_file_name(Path::new("1200.v2.jpg")), Some(1200));
        assert_eq!(frame_from_file_name(Path::new("cover.jpg")), None);
        assert_eq!(frame_from_file_name(Path::new(".jpg")), None);
    }
}
