//! Layout configuration.
//!
//! [`LayoutOptions`] is a builder holding the tunable constants of the grid
//! packer: the whitespace budget reserved before sizing thumbnails, the
//! minimum outer margin, and the two thresholds below which a layout is not
//! worth drawing.
//!
//! # Example
//!
//! ```
//! use edit_breakdown::LayoutOptions;
//!
//! let options = LayoutOptions::new()
//!     .with_spacing_budget(200.0, 120.0)
//!     .with_min_margin(24.0);
//! assert_eq!(options.min_margin, 24.0);
//! ```

/// Default whitespace budget per axis, in pixels.
pub const DEFAULT_SPACING_BUDGET: (f64, f64) = (150.0, 150.0);
/// Default minimum margin, in pixels.
pub const DEFAULT_MIN_MARGIN: f64 = 40.0;
/// Default per-thumbnail area below which the layout degenerates, in px².
pub const DEFAULT_MIN_AREA: f64 = 20.0;
/// Default edge length at or below which thumbnails are not drawn, in pixels.
pub const DEFAULT_MIN_EDGE: f64 = 5.0;

/// Tunable constants for the grid packer.
///
/// All fields have sensible defaults; a default-constructed value reproduces
/// the reference layout exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct LayoutOptions {
    /// Total whitespace reserved along each axis `(x, y)` before the
    /// thumbnail scale is estimated.
    pub spacing_budget: (f64, f64),
    /// Minimum margin around the grid. Also caps the spacing between
    /// thumbnails.
    pub min_margin: f64,
    /// Per-thumbnail pixel area below which the packer returns a degenerate
    /// layout.
    pub min_area: f64,
    /// Thumbnail edge length at or below which the layout is reported as not
    /// renderable.
    pub min_edge: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutOptions {
    /// Create options with the default constants.
    ///
    /// Defaults: 150×150 px spacing budget, 40 px margin, 20 px² minimum
    /// area, 5 px minimum edge.
    pub fn new() -> Self {
        Self {
            spacing_budget: DEFAULT_SPACING_BUDGET,
            min_margin: DEFAULT_MIN_MARGIN,
            min_area: DEFAULT_MIN_AREA,
            min_edge: DEFAULT_MIN_EDGE,
        }
    }

    /// Set the whitespace budget reserved along each axis.
    ///
    /// Negative values are clamped to zero.
    pub fn with_spacing_budget(mut self, horizontal: f64, vertical: f64) -> Self {
        self.spacing_budget = (horizontal.max(0.0), vertical.max(0.0));
        self
    }

    /// Set the minimum margin. Clamped to a minimum of zero.
    pub fn with_min_margin(mut self, margin: f64) -> Self {
        self.min_margin = margin.max(0.0);
        self
    }

    /// Set the minimum per-thumbnail area. Clamped to a minimum of zero.
    pub fn with_min_area(mut self, area: f64) -> Self {
        self.min_area = area.max(0.0);
        self
    }

    /// Set the minimum drawable edge length. Clamped to a minimum of zero.
    pub fn with_min_edge(mut self, edge: f64) -> Self {
        self.min_edge = edge.max(0.0);
        self
    }
}
