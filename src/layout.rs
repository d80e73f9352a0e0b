//! Thumbnail grid packing.
//!
//! [`ThumbnailLayout::fit`] finds one thumbnail size shared by every image
//! and a position for each image so that the whole set is visible inside a
//! [`DrawRegion`], evenly spaced, and as large as the region allows.
//!
//! The size starts from a plain area estimate: the region, minus a
//! whitespace budget, is divided by the number of images and the image
//! aspect ratio is preserved. That estimate is off as soon as images do not
//! exactly fill a row, so it is then clamped so a full row and a full column
//! both fit inside the region minus the minimum margin. Whatever space is
//! left over becomes margins and spacing.
//!
//! Positions use region-local coordinates with the origin at the bottom-left
//! corner and `y` growing upwards. Images are placed row-major, starting at
//! the top-left of the region.
//!
//! # Example
//!
//! ```
//! use edit_breakdown::{DrawRegion, LayoutOptions, LayoutRequest, ThumbnailLayout};
//!
//! let request = LayoutRequest::new(DrawRegion::new(0, 1000, 600), 6, (200, 100));
//! let layout = ThumbnailLayout::fit(&request, &LayoutOptions::default());
//!
//! assert_eq!((layout.columns, layout.rows), (3, 2));
//! assert_eq!(layout.positions.len(), 6);
//! assert!(layout.is_renderable());
//! ```

use crate::configuration::LayoutOptions;
use crate::region::DrawRegion;

/// Input of a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRequest {
    /// Usable rectangle the grid must fit in.
    pub region: DrawRegion,
    /// Number of thumbnails to place.
    pub count: usize,
    /// Native `(width, height)` of the images. Every image is assumed to
    /// share this aspect ratio.
    pub image_size: (u32, u32),
}

impl LayoutRequest {
    /// Create a layout request.
    pub fn new(region: DrawRegion, count: usize, image_size: (u32, u32)) -> Self {
        Self {
            region,
            count,
            image_size,
        }
    }
}

/// Result of a layout pass.
///
/// All thumbnails share [`size`](ThumbnailLayout::size); only their
/// positions differ.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ThumbnailLayout {
    /// Shared thumbnail `(width, height)` in pixels.
    pub size: (f64, f64),
    /// Number of thumbnails per row.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
    /// Outer margin `(x, y)` on each side of the grid.
    pub margins: (f64, f64),
    /// Gap `(x, y)` between adjacent thumbnails.
    pub spacing: (f64, f64),
    /// Bottom-left corner of each thumbnail, in input order.
    pub positions: Vec<(f64, f64)>,
    renderable: bool,
}

/// Margin and spacing along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisSpacing {
    margin: f64,
    spacing: f64,
}

impl ThumbnailLayout {
    /// A layout with nothing to place.
    pub fn empty() -> Self {
        Self {
            size: (0.0, 0.0),
            columns: 0,
            rows: 0,
            margins: (0.0, 0.0),
            spacing: (0.0, 0.0),
            positions: Vec::new(),
            renderable: false,
        }
    }

    /// A zero-sized layout for `count` thumbnails that are too small to draw.
    ///
    /// Every position is parked at the region origin.
    fn degenerate(region: &DrawRegion, count: usize) -> Self {
        Self {
            positions: vec![(f64::from(region.offset_x), 0.0); count],
            ..Self::empty()
        }
    }

    /// Compute the thumbnail size and positions for a request.
    ///
    /// Never fails. An empty request yields [`ThumbnailLayout::empty`]; a
    /// region too small to hold the images yields a zero-sized layout for
    /// which [`is_renderable`](ThumbnailLayout::is_renderable) is `false`.
    pub fn fit(request: &LayoutRequest, options: &LayoutOptions) -> Self {
        let count = request.count;
        if count == 0 {
            return Self::empty();
        }

        let region = &request.region;
        let total_w = f64::from(region.width);
        let total_h = f64::from(region.height);
        let offset_x = f64::from(region.offset_x);
        log::debug!("Fitting {count} thumbnails in region w:{total_w} h:{total_h}");

        let available_w = total_w - options.spacing_budget.0;
        let available_h = total_h - options.spacing_budget.1;
        let max_w = total_w - options.min_margin;
        let max_h = total_h - options.min_margin;

        let (image_w, image_h) = (
            f64::from(request.image_size.0),
            f64::from(request.image_size.1),
        );
        if image_w <= 0.0 || image_h <= 0.0 || available_w <= 0.0 || available_h <= 0.0 {
            return Self::degenerate(region, count);
        }
        log::debug!(
            "Image a.ratio={:.2} ({image_w}x{image_h})",
            image_w / image_h
        );

        let thumbnail_area = available_w * available_h / count as f64;
        if thumbnail_area < options.min_area {
            return Self::degenerate(region, count);
        }

        let mut scale = (thumbnail_area / (image_w * image_h)).sqrt();
        log::debug!("Scale factor: {scale:.3}");

        // Rows may hold fewer images than columns. A lone image gets a single
        // column so that it is centred.
        let columns = if count == 1 {
            1
        } else {
            ((available_w / (image_w * scale)).ceil() as usize).max(1)
        };
        let rows = count.div_ceil(columns);
        log::debug!("Grid {columns} per row, {rows} per column");

        // The area estimate ignores row and column granularity: a full row
        // or a full column may still overflow the region.
        if image_w * scale * columns as f64 > max_w {
            scale = max_w / (image_w * columns as f64);
        }
        if image_h * scale * rows as f64 > max_h {
            scale = max_h / (image_h * rows as f64);
        }
        log::debug!("Reduced scale factor: {scale:.3}");
        if scale <= 0.0 {
            return Self::degenerate(region, count);
        }

        let size = (image_w * scale, image_h * scale);
        let x_axis = distribute(total_w, size.0, columns, options.min_margin);
        let y_axis = distribute(total_h, size.1, rows, options.min_margin);

        let step_x = size.0 + x_axis.spacing;
        let step_y = size.1 + y_axis.spacing;
        let start_x = offset_x + x_axis.margin;
        let start_y = total_h - size.1 - y_axis.margin;
        let positions = (0..count)
            .map(|index| {
                let column = (index % columns) as f64;
                let row = (index / columns) as f64;
                (start_x + column * step_x, start_y - row * step_y)
            })
            .collect();

        Self {
            size,
            columns,
            rows,
            margins: (x_axis.margin, y_axis.margin),
            spacing: (x_axis.spacing, y_axis.spacing),
            positions,
            renderable: size.0 > options.min_edge && size.1 > options.min_edge,
        }
    }

    /// Returns `true` if the thumbnails are large enough to be drawn.
    ///
    /// Callers must skip drawing entirely when this is `false`.
    pub fn is_renderable(&self) -> bool {
        self.renderable && !self.positions.is_empty()
    }

    /// Number of placed thumbnails.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no thumbnails were placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rectangle `(x, y, width, height)` of the thumbnail at `index`.
    pub fn rect(&self, index: usize) -> Option<(f64, f64, f64, f64)> {
        self.positions
            .get(index)
            .map(|&(x, y)| (x, y, self.size.0, self.size.1))
    }

    /// Index of the first thumbnail containing the point, edges included.
    ///
    /// Always `None` for layouts that are not renderable.
    pub fn thumbnail_at(&self, x: f64, y: f64) -> Option<usize> {
        if !self.is_renderable() {
            return None;
        }
        let (width, height) = self.size;
        self.positions.iter().position(|&(left, bottom)| {
            x >= left && x <= left + width && y >= bottom && y <= bottom + height
        })
    }
}

/// Split the space left along one axis into margins and spacing.
///
/// `min_margin` is taken off the leftover once before dividing it into gaps
/// and the resulting gap is capped at `min_margin`. Whatever remains becomes
/// the margin on both ends, rounded down.
fn distribute(total: f64, thumb: f64, count: usize, min_margin: f64) -> AxisSpacing {
    let leftover = total - thumb * count as f64;
    let gaps = count.saturating_sub(1) as f64;

    let spacing = if count > 1 {
        ((leftover - min_margin) / gaps).ceil().min(min_margin)
    } else {
        0.0
    };
    let margin = ((leftover - spacing * gaps) / 2.0).floor();
    log::debug!("remaining space {leftover:.2}px, spacing={spacing}, margins={margin}");

    AxisSpacing { margin, spacing }
}
