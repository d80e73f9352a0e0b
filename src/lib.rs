//! # edit_breakdown
//!
//! Edit breakdown: lay out shot thumbnails in a viewport and annotate
//! shots with production metadata.
//!
//! `edit_breakdown` computes where the thumbnails of an edit go: given the
//! viewport a host application draws into, the number of shots, and the
//! aspect ratio of their thumbnails, it picks one thumbnail size and a grid
//! position per shot so that every thumbnail is visible, evenly spaced, and
//! as large as possible. It also carries the per-shot metadata schema used
//! to estimate production work.
//!
//! ## Quick Start
//!
//! ### Lay Out Thumbnails
//!
//! ```no_run
//! use edit_breakdown::{
//!     ChromeKind, ChromeRegion, DrawRegion, LayoutOptions, ThumbnailLayout, ThumbnailSet,
//!     Viewport,
//! };
//!
//! let thumbnails = ThumbnailSet::load("shots").unwrap();
//! let viewport = Viewport::new(1280, 720)
//!     .with_chrome(ChromeRegion::new(ChromeKind::Header, 0, 26));
//! let region = DrawRegion::from_viewport(&viewport);
//!
//! let layout = ThumbnailLayout::fit(
//!     &thumbnails.layout_request(region),
//!     &LayoutOptions::default(),
//! );
//! if layout.is_renderable() {
//!     for (image, position) in thumbnails.images.iter().zip(&layout.positions) {
//!         println!("{} at {:?}, size {:?}", image.path.display(), position, layout.size);
//!     }
//! }
//! ```
//!
//! ### Annotate Shots
//!
//! ```
//! use edit_breakdown::{AnimationComplexity, EditBreakdown, Marker, ShotTag};
//!
//! let mut breakdown = EditBreakdown::new();
//! breakdown.sync(&[Marker::new(1, "opening", 0), Marker::new(2, "chase", 96)], 240);
//!
//! let chase = &mut breakdown.shots[1];
//! chase.animation_complexity = AnimationComplexity::new(3).unwrap();
//! chase.set_tag(ShotTag::HasCrowd, true);
//!
//! println!("{}", breakdown.to_csv());
//! ```
//!
//! ## Features
//!
//! - **Region sizing**: discount host chrome (header, side panels, tool
//!   panel) drawn over the viewport
//! - **Grid packing**: shared thumbnail size, per-axis margins and spacing,
//!   row-major positions in bottom-left region coordinates
//! - **Hit testing**: find the thumbnail under a point
//! - **Thumbnail discovery**: scan a directory of frame-numbered images,
//!   reading only their headers
//! - **Validation**: report mixed aspect ratios and other approximations
//! - **Shot metadata**: characters, animation complexity, effects and crowd
//!   tags, marker sync, CSV export
//! - **Contact sheets**: render a layout to an image

pub mod configuration;
pub mod error;
pub mod layout;
pub mod region;
pub mod sheet;
pub mod shot;
pub mod thumbnail;
pub mod validation;

pub use configuration::LayoutOptions;
pub use error::BreakdownError;
pub use layout::{LayoutRequest, ThumbnailLayout};
pub use region::{ChromeKind, ChromeRegion, DrawRegion, Viewport};
pub use sheet::{SheetOverlay, compose_sheet};
pub use shot::{
    AnimationComplexity, Character, EditBreakdown, Marker, Shot, ShotTag, format_timestamp,
};
pub use thumbnail::{ThumbnailImage, ThumbnailSet};
pub use validation::ValidationReport;
