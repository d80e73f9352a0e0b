//! Usable drawing region.
//!
//! The host viewport may draw parts of its chrome (header bar, side panels)
//! on top of the area the thumbnails live in. [`DrawRegion::from_viewport`]
//! removes that chrome so no thumbnail ends up hidden behind it.
//!
//! # Example
//!
//! ```
//! use edit_breakdown::{ChromeKind, ChromeRegion, DrawRegion, Viewport};
//!
//! let viewport = Viewport::new(1200, 800)
//!     .with_chrome(ChromeRegion::new(ChromeKind::Header, 0, 26))
//!     .with_chrome(ChromeRegion::new(ChromeKind::Toolbar, 48, 0));
//! let region = DrawRegion::from_viewport(&viewport);
//! assert_eq!((region.offset_x, region.width, region.height), (48, 1152, 774));
//! ```

/// The role of a chrome region laid over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeKind {
    /// Header bar along the top edge. Its height is removed.
    Header,
    /// Properties side panel along the right edge. Its width is removed.
    Sidebar,
    /// Tool panel along the left edge. Its width is removed and the content
    /// is shifted right by the same amount.
    Toolbar,
    /// Any other region (footers, popups). Ignored.
    Other,
}

/// One piece of host chrome that may overlay the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeRegion {
    /// What the region is.
    pub kind: ChromeKind,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Hidden regions take no space.
    pub visible: bool,
}

impl ChromeRegion {
    /// Create a visible chrome region.
    pub fn new(kind: ChromeKind, width: i32, height: i32) -> Self {
        Self {
            kind,
            width,
            height,
            visible: true,
        }
    }

    /// Mark the region as shown or hidden.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Snapshot of the host viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Raw viewport width in pixels.
    pub width: i32,
    /// Raw viewport height in pixels.
    pub height: i32,
    /// Whether the host draws its chrome on top of the viewport instead of
    /// reserving space for it.
    pub overlap: bool,
    /// Chrome regions attached to the viewport.
    pub chrome: Vec<ChromeRegion>,
}

impl Viewport {
    /// Create a viewport with chrome overlap enabled and no chrome.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            overlap: true,
            chrome: Vec::new(),
        }
    }

    /// Set whether chrome overlaps the viewport.
    pub fn with_overlap(mut self, overlap: bool) -> Self {
        self.overlap = overlap;
        self
    }

    /// Attach a chrome region.
    pub fn with_chrome(mut self, region: ChromeRegion) -> Self {
        self.chrome.push(region);
        self
    }
}

/// The rectangle available for thumbnails, in region-local pixels.
///
/// Dimensions can be zero or negative when the chrome is larger than the
/// viewport. The packer treats such regions as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DrawRegion {
    /// Horizontal shift applied to the whole grid.
    pub offset_x: i32,
    /// Usable width.
    pub width: i32,
    /// Usable height.
    pub height: i32,
}

impl DrawRegion {
    /// Create a region directly from its dimensions.
    pub fn new(offset_x: i32, width: i32, height: i32) -> Self {
        Self {
            offset_x,
            width,
            height,
        }
    }

    /// Compute the usable region of a viewport.
    ///
    /// Chrome regions one pixel thick or less are collapsed and ignored.
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let mut region = Self::new(0, viewport.width, viewport.height);
        if !viewport.overlap {
            return region;
        }

        for chrome in viewport.chrome.iter().filter(|chrome| chrome.visible) {
            match chrome.kind {
                ChromeKind::Header if chrome.height > 1 => {
                    region.height = region.height.saturating_sub(chrome.height);
                }
                ChromeKind::Sidebar if chrome.width > 1 => {
                    region.width = region.width.saturating_sub(chrome.width);
                }
                ChromeKind::Toolbar if chrome.width > 1 => {
                    region.width = region.width.saturating_sub(chrome.width);
                    region.offset_x = chrome.width;
                }
                _ => {}
            }
        }

        log::debug!(
            "Draw region w:{} h:{} offset:{}",
            region.width,
            region.height,
            region.offset_x
        );
        region
    }
}
