//! Error types for the `edit_breakdown` crate.
//!
//! This module defines [`BreakdownError`], the unified error type returned by
//! all fallible operations in the crate. Layout computation itself never
//! fails; errors only come from reading thumbnails, validating metadata, and
//! writing output.

use std::{io::Error as IoError, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// The unified error type for all `edit_breakdown` operations.
///
/// Every public method that can fail returns `Result<T, BreakdownError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BreakdownError {
    /// A thumbnail file exists but its image header could not be read.
    #[error("Failed to read thumbnail at {path}: {reason}")]
    ThumbnailRead {
        /// Path of the offending thumbnail.
        path: PathBuf,
        /// Underlying reason the read failed.
        reason: String,
    },

    /// An animation complexity score outside the `0..=3` range.
    #[error("Animation complexity {0} is out of range (expected 0 to 3)")]
    InvalidComplexity(u8),

    /// A shot index that does not exist in the breakdown.
    #[error("Shot {index} is out of range (breakdown has {shot_count} shots)")]
    ShotOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of shots in the breakdown.
        shot_count: usize,
    },

    /// A frame rate of zero or less was supplied.
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f64),

    /// The requested canvas cannot hold any pixels.
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas {
        /// Requested canvas width.
        width: u32,
        /// Requested canvas height.
        height: u32,
    },

    /// The layout does not describe the thumbnail set it is paired with.
    #[error("Layout has {positions} positions but the set holds {images} thumbnails")]
    LayoutMismatch {
        /// Number of positions in the layout.
        positions: usize,
        /// Number of images in the thumbnail set.
        images: usize,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate while decoding or encoding thumbnails.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}
