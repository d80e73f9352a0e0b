//! Contact sheet rendering.
//!
//! [`compose_sheet`] paints a computed [`ThumbnailLayout`] into an image the
//! size of the viewport, the same way the breakdown view draws it: shared
//! thumbnail size, optional tag strips along the bottom of tagged shots, and
//! a frame around the selected shot.
//!
//! # Example
//!
//! ```no_run
//! use edit_breakdown::{
//!     compose_sheet, BreakdownError, DrawRegion, LayoutOptions, ThumbnailLayout,
//!     ThumbnailSet,
//! };
//!
//! let thumbnails = ThumbnailSet::load("shots")?;
//! let request = thumbnails.layout_request(DrawRegion::new(0, 1280, 720));
//! let layout = ThumbnailLayout::fit(&request, &LayoutOptions::default());
//! let sheet = compose_sheet(&thumbnails, &layout, (1280, 720), None)?;
//! sheet.save("breakdown.png")?;
//! # Ok::<(), BreakdownError>(())
//! ```

use image::{Pixel, Rgba, RgbaImage, imageops, imageops::FilterType};

use crate::error::BreakdownError;
use crate::layout::ThumbnailLayout;
use crate::shot::{EditBreakdown, ShotTag};
use crate::thumbnail::ThumbnailSet;

/// Viewport background.
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([26, 26, 26, 255]);
/// Strip color for shots tagged with effects.
pub const FX_TAG_COLOR: Rgba<u8> = Rgba([214, 0, 217, 230]);
/// Strip color for any other tag.
pub const TAG_COLOR: Rgba<u8> = Rgba([235, 207, 79, 230]);
/// Frame color around the selected shot.
pub const SELECTION_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Shot metadata drawn on top of the thumbnails.
#[derive(Debug, Clone, Copy)]
pub struct SheetOverlay<'a> {
    /// Shots matching the thumbnails, index for index.
    pub breakdown: &'a EditBreakdown,
    /// Tag to highlight, if any.
    pub tag: Option<ShotTag>,
}

/// Paint a layout into a `canvas`-sized image.
///
/// Positions are region-local with a bottom-left origin, so they are flipped
/// onto image rows here. When the layout is not renderable only the
/// background is painted.
///
/// # Errors
///
/// Returns [`BreakdownError::InvalidCanvas`] for an empty canvas,
/// [`BreakdownError::LayoutMismatch`] if the layout was computed for a
/// different number of thumbnails, or [`BreakdownError::ThumbnailRead`] if a
/// thumbnail cannot be decoded.
pub fn compose_sheet(
    thumbnails: &ThumbnailSet,
    layout: &ThumbnailLayout,
    canvas: (u32, u32),
    overlay: Option<&SheetOverlay<'_>>,
) -> Result<RgbaImage, BreakdownError> {
    let (canvas_width, canvas_height) = canvas;
    if canvas_width == 0 || canvas_height == 0 {
        return Err(BreakdownError::InvalidCanvas {
            width: canvas_width,
            height: canvas_height,
        });
    }
    if layout.len() != thumbnails.len() {
        return Err(BreakdownError::LayoutMismatch {
            positions: layout.len(),
            images: thumbnails.len(),
        });
    }

    let mut sheet = RgbaImage::from_pixel(canvas_width, canvas_height, BACKGROUND_COLOR);
    if !layout.is_renderable() {
        log::debug!("Layout too small to draw, painting background only");
        return Ok(sheet);
    }

    let (thumb_width, thumb_height) = layout.size;
    let scaled_width = thumb_width.round() as u32;
    let scaled_height = thumb_height.round() as u32;
    let to_image_space = |x: f64, y: f64, height: f64| {
        (
            x.round() as i64,
            (f64::from(canvas_height) - y - height).round() as i64,
        )
    };

    for (image, &(x, y)) in thumbnails.images.iter().zip(&layout.positions) {
        let decoded = image::open(&image.path).map_err(|error| BreakdownError::ThumbnailRead {
            path: image.path.clone(),
            reason: error.to_string(),
        })?;
        let thumbnail = decoded
            .resize_exact(scaled_width, scaled_height, FilterType::Triangle)
            .to_rgba8();
        let (left, top) = to_image_space(x, y, thumb_height);
        imageops::overlay(&mut sheet, &thumbnail, left, top);
    }

    let Some(overlay) = overlay else {
        return Ok(sheet);
    };

    if let Some(tag) = overlay.tag {
        let color = if tag == ShotTag::HasFx {
            FX_TAG_COLOR
        } else {
            TAG_COLOR
        };
        let strip_height = (thumb_height * 0.23).max(4.0);
        for (shot, &(x, y)) in overlay.breakdown.shots.iter().zip(&layout.positions) {
            if shot.tag(tag) {
                let (left, top) = to_image_space(x, y, strip_height);
                fill_rect(&mut sheet, left, top, scaled_width, strip_height.round() as u32, color);
            }
        }
    }

    if let Some(&(x, y)) = overlay
        .breakdown
        .selected
        .and_then(|index| layout.positions.get(index))
    {
        let (left, top) = to_image_space(x - 1.0, y - 1.0, thumb_height + 2.0);
        stroke_rect(&mut sheet, left, top, scaled_width + 2, scaled_height + 2, SELECTION_COLOR);
    }

    Ok(sheet)
}

/// Blend `color` over a rectangle, clipped to the image.
fn fill_rect(image: &mut RgbaImage, left: i64, top: i64, width: u32, height: u32, color: Rgba<u8>) {
    let x_range = left.max(0)..(left + i64::from(width)).min(i64::from(image.width()));
    let y_range = top.max(0)..(top + i64::from(height)).min(i64::from(image.height()));
    for y in y_range {
        for x in x_range.clone() {
            image.get_pixel_mut(x as u32, y as u32).blend(&color);
        }
    }
}

/// One-pixel outline, clipped to the image.
fn stroke_rect(
    image: &mut RgbaImage,
    left: i64,
    top: i64,
    width: u32,
    height: u32,
    color: Rgba<u8>,
) {
    let right = left + i64::from(width) - 1;
    let bottom = top + i64::from(height) - 1;
    fill_rect(image, left, top, width, 1, color);
    fill_rect(image, left, bottom, width, 1, color);
    fill_rect(image, left, top, 1, height, color);
    fill_rect(image, right, top, 1, height, color);
}
