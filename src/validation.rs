//! Thumbnail set validation.
//!
//! Provides [`ThumbnailSet::validate`] which inspects a loaded set and
//! returns a [`ValidationReport`] describing anything the layout will
//! silently approximate, such as images that do not share the first image's
//! aspect ratio.
//!
//! # Example
//!
//! ```no_run
//! use edit_breakdown::ThumbnailSet;
//!
//! let thumbnails = ThumbnailSet::load("shots")?;
//! let report = thumbnails.validate();
//! if !report.is_valid() {
//!     for error in &report.errors {
//!         println!("Error: {error}");
//!     }
//! }
//! # Ok::<(), edit_breakdown::BreakdownError>(())
//! ```

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::thumbnail::ThumbnailSet;

/// Relative aspect ratio difference tolerated before images count as mixed.
const ASPECT_RATIO_TOLERANCE: f64 = 0.01;

/// Summary of thumbnail set validation.
///
/// Produced by [`ThumbnailSet::validate`]. Contains lists of informational
/// notices, warnings, and errors found during validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Informational notices (not problems).
    pub info: Vec<String>,
    /// Issues that make the layout approximate.
    pub warnings: Vec<String>,
    /// Issues that prevent a usable layout.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` if no errors were found.
    ///
    /// Warnings do not affect this result.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of issues (info + warnings + errors).
    pub fn issue_count(&self) -> usize {
        self.info.len() + self.warnings.len() + self.errors.len()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for item in &self.info {
            writeln!(f, "[INFO] {item}")?;
        }
        for item in &self.warnings {
            writeln!(f, "[WARN] {item}")?;
        }
        for item in &self.errors {
            writeln!(f, "[ERROR] {item}")?;
        }
        if self.issue_count() == 0 {
            writeln!(f, "No issues found.")?;
        }
        Ok(())
    }
}

impl ThumbnailSet {
    /// Check the set for problems the layout would gloss over.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport {
            warnings: self.warnings.clone(),
            ..ValidationReport::default()
        };

        let Some(first) = self.images.first() else {
            report
                .info
                .push("No thumbnails found — layout will be empty".to_string());
            return report;
        };

        report.info.push(format!(
            "{} thumbnails, laid out at {}×{} aspect ratio",
            self.len(),
            first.width,
            first.height,
        ));

        // ── Dimensions ─────────────────────────────────────────────────
        for image in self.images.iter().filter(|image| image.aspect_ratio().is_none()) {
            report.errors.push(format!(
                "Invalid thumbnail dimensions: {}×{} ({})",
                image.width,
                image.height,
                image.path.display(),
            ));
        }

        // ── Aspect ratio ───────────────────────────────────────────────
        if let Some(reference) = first.aspect_ratio() {
            let mismatched: Vec<_> = self
                .images
                .iter()
                .filter_map(|image| image.aspect_ratio().map(|ratio| (image, ratio)))
                .filter(|(_, ratio)| (ratio / reference - 1.0).abs() > ASPECT_RATIO_TOLERANCE)
                .collect();
            if !mismatched.is_empty() {
                report.warnings.push(format!(
                    "{} thumbnails differ from the first image's aspect ratio ({:.3}) and will be drawn distorted, e.g. frame {} at {:.3}",
                    mismatched.len(),
                    reference,
                    mismatched[0].0.start_frame,
                    mismatched[0].1,
                ));
            }
        }

        // ── Ordering keys ──────────────────────────────────────────────
        let mut frames: HashMap<i64, usize> = HashMap::new();
        for image in &self.images {
            *frames.entry(image.start_frame).or_default() += 1;
        }
        let mut duplicates: Vec<_> = frames
            .into_iter()
            .filter(|&(_, occurrences)| occurrences > 1)
            .map(|(frame, _)| frame)
            .collect();
        duplicates.sort_unstable();
        for frame in duplicates {
            report.warnings.push(format!(
                "Several thumbnails start on frame {frame}; their order is arbitrary"
            ));
        }

        report
    }
}
