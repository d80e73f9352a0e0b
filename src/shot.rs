//! Shot metadata.
//!
//! An [`EditBreakdown`] is the list of shots in an edit, one per timeline
//! marker, each carrying the production metadata used to estimate the work
//! a shot needs: which characters appear, how complex the animation is, and
//! whether it involves effects or crowds.
//!
//! # Example
//!
//! ```
//! use edit_breakdown::{Character, EditBreakdown, Marker};
//!
//! let mut breakdown = EditBreakdown::new();
//! breakdown.sync(
//!     &[Marker::new(1, "intro", 0), Marker::new(2, "chase", 120)],
//!     300,
//! );
//! breakdown.shots[1].characters = Character::ALICE | Character::BOB;
//!
//! assert_eq!(breakdown.shots[0].duration, 120);
//! assert_eq!(breakdown.shots[1].duration, 180);
//! assert_eq!(breakdown.shots[1].character_count(), 2);
//! ```

use bitflags::bitflags;

use crate::error::BreakdownError;

bitflags! {
    /// Characters present in a shot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Character: u32 {
        /// Alice.
        const ALICE = 1 << 0;
        /// Bob.
        const BOB   = 1 << 1;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::empty()
    }
}

impl Character {
    /// Display name of a single character flag.
    pub fn display_name(self) -> Option<&'static str> {
        if self == Character::ALICE {
            Some("Alice")
        } else if self == Character::BOB {
            Some("Bob")
        } else {
            None
        }
    }
}

/// Animation complexity score, from 0 (static) to 3 (hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AnimationComplexity(u8);

impl AnimationComplexity {
    /// Highest allowed score.
    pub const MAX: u8 = 3;

    /// Create a score, rejecting values above [`AnimationComplexity::MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError::InvalidComplexity`] for scores above 3.
    pub fn new(score: u8) -> Result<Self, BreakdownError> {
        if score > Self::MAX {
            return Err(BreakdownError::InvalidComplexity(score));
        }
        Ok(Self(score))
    }

    /// The raw score.
    pub fn score(self) -> u8 {
        self.0
    }
}

/// Boolean tags that can be painted onto shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotTag {
    /// The shot needs effects work.
    HasFx,
    /// The shot contains a crowd.
    HasCrowd,
}

/// A timeline marker, the source of one shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Stable identifier linking the marker to its shot across syncs.
    pub id: u64,
    /// Marker label, used as the initial shot name.
    pub name: String,
    /// Frame the marker sits on.
    pub frame: i64,
}

impl Marker {
    /// Create a marker.
    pub fn new(id: u64, name: impl Into<String>, frame: i64) -> Self {
        Self {
            id,
            name: name.into(),
            frame,
        }
    }
}

/// Production metadata for one shot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shot {
    /// Shot name.
    pub name: String,
    /// Identifier of the marker this shot was created from.
    pub marker_id: u64,
    /// First frame of the shot.
    pub frame_start: i64,
    /// Number of frames, derived from the next shot's start.
    pub duration: i64,
    /// How hard the shot is to animate.
    pub animation_complexity: AnimationComplexity,
    /// Needs effects work.
    pub has_fx: bool,
    /// Contains a crowd.
    pub has_crowd: bool,
    /// Characters appearing in the shot.
    pub characters: Character,
}

impl Shot {
    /// Number of characters present.
    pub fn character_count(&self) -> u32 {
        self.characters.bits().count_ones()
    }

    /// Duration in seconds at the given frame rate.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError::InvalidFrameRate`] if `fps` is not positive.
    pub fn duration_seconds(&self, fps: f64) -> Result<f64, BreakdownError> {
        if fps.is_nan() || fps <= 0.0 {
            return Err(BreakdownError::InvalidFrameRate(fps));
        }
        Ok(self.duration as f64 / fps)
    }

    /// Value of a boolean tag.
    pub fn tag(&self, tag: ShotTag) -> bool {
        match tag {
            ShotTag::HasFx => self.has_fx,
            ShotTag::HasCrowd => self.has_crowd,
        }
    }

    /// Set a boolean tag.
    pub fn set_tag(&mut self, tag: ShotTag, value: bool) {
        match tag {
            ShotTag::HasFx => self.has_fx = value,
            ShotTag::HasCrowd => self.has_crowd = value,
        }
    }

    /// Flip a boolean tag, returning the new value.
    pub fn toggle_tag(&mut self, tag: ShotTag) -> bool {
        let value = !self.tag(tag);
        self.set_tag(tag, value);
        value
    }
}

/// Column names of the CSV export, in order.
pub const CSV_HEADER: [&str; 7] = [
    "shot_name",
    "frame_start",
    "duration",
    "character_count",
    "animation_complexity",
    "has_fx",
    "has_crowd",
];

/// The shots of an edit, ordered by start frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct EditBreakdown {
    /// Shots in ascending start-frame order.
    pub shots: Vec<Shot>,
    /// Index of the active shot, if any.
    pub selected: Option<usize>,
}

impl EditBreakdown {
    /// Create an empty breakdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the shots up to date with the timeline markers.
    ///
    /// Markers without a shot get a new one, shots whose marker is gone are
    /// removed, and the rest keep their metadata but move to the marker's
    /// frame. Shots are then sorted by start frame and each one lasts until
    /// the next one starts. The last shot lasts until `scene_end`.
    pub fn sync(&mut self, markers: &[Marker], scene_end: i64) {
        log::debug!("Syncing {} markers -> {} shots", markers.len(), self.shots.len());

        let selected_marker = self
            .selected
            .and_then(|index| self.shots.get(index))
            .map(|shot| shot.marker_id);

        self.shots.retain(|shot| {
            let keep = markers.iter().any(|marker| marker.id == shot.marker_id);
            if !keep {
                log::debug!("Deleting shot {}", shot.name);
            }
            keep
        });

        for marker in markers {
            match self.shots.iter_mut().find(|shot| shot.marker_id == marker.id) {
                Some(shot) => shot.frame_start = marker.frame,
                None => {
                    log::debug!("Creating new shot for marker {}", marker.name);
                    self.shots.push(Shot {
                        name: marker.name.clone(),
                        marker_id: marker.id,
                        frame_start: marker.frame,
                        ..Shot::default()
                    });
                }
            }
        }

        self.shots.sort_by_key(|shot| shot.frame_start);
        self.update_durations(scene_end);

        self.selected = selected_marker
            .and_then(|id| self.shots.iter().position(|shot| shot.marker_id == id));
    }

    fn update_durations(&mut self, scene_end: i64) {
        let Some(last) = self.shots.last() else {
            return;
        };
        let mut next_start = scene_end.max(last.frame_start);
        for shot in self.shots.iter_mut().rev() {
            shot.duration = next_start - shot.frame_start;
            next_start = shot.frame_start;
        }
    }

    /// Select a shot, or clear the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError::ShotOutOfRange`] if the index does not exist.
    pub fn select(&mut self, index: Option<usize>) -> Result<(), BreakdownError> {
        if let Some(index) = index {
            if index >= self.shots.len() {
                return Err(BreakdownError::ShotOutOfRange {
                    index,
                    shot_count: self.shots.len(),
                });
            }
        }
        self.selected = index;
        Ok(())
    }

    /// Select the shot playing at `frame`: the last one starting at or
    /// before it. Clears the selection before the first shot.
    pub fn select_at_frame(&mut self, frame: i64) -> Option<usize> {
        self.selected = self
            .shots
            .iter()
            .rposition(|shot| shot.frame_start <= frame);
        self.selected
    }

    /// The active shot, if any.
    pub fn selected_shot(&self) -> Option<&Shot> {
        self.selected.and_then(|index| self.shots.get(index))
    }

    /// Total frames in a scene range.
    pub fn total_frames(scene_start: i64, scene_end: i64) -> i64 {
        scene_end - scene_start
    }

    /// Export the breakdown as CSV, header first.
    pub fn to_csv(&self) -> String {
        let mut output = CSV_HEADER.join(",");
        output.push('\n');
        for shot in &self.shots {
            let row = [
                csv_field(&shot.name),
                shot.frame_start.to_string(),
                shot.duration.to_string(),
                shot.character_count().to_string(),
                shot.animation_complexity.score().to_string(),
                csv_bool(shot.has_fx).to_string(),
                csv_bool(shot.has_crowd).to_string(),
            ];
            output.push_str(&row.join(","));
            output.push('\n');
        }
        output
    }
}

fn csv_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Quote a field if it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Format a frame count as `HH:MM:SS.mmm` at the given frame rate.
///
/// Negative counts get a leading `-`.
///
/// # Errors
///
/// Returns [`BreakdownError::InvalidFrameRate`] if `fps` is not positive.
pub fn format_timestamp(frames: i64, fps: f64) -> Result<String, BreakdownError> {
    if fps.is_nan() || fps <= 0.0 {
        return Err(BreakdownError::InvalidFrameRate(fps));
    }

    let sign = if frames < 0 { "-" } else { "" };
    let frames = frames.unsigned_abs() as f64;

    let hours = (frames / (3600.0 * fps)) as u64;
    let minutes = ((frames / (60.0 * fps)) % 60.0) as u64;
    let seconds = ((frames / fps) % 60.0) as u64;
    let milliseconds = ((frames % fps) * (1000.0 / fps)) as u64;
    Ok(format!(
        "{sign}{hours:02}:{minutes:02}:{seconds:02}.{milliseconds:03}"
    ))
}
