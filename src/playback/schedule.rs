//! Conversion of a grid into a time-ordered list of playback actions
//!
//! Tiles are read row-major. Each tile contributes note actions (one note
//! or an inverted chord) and a highlight pair; canon and counterpoint add a
//! delayed second voice. All times are offsets from playback start and are
//! divided by the playback speed.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::io::configuration::{
    CANON_OFFSET_SECS, CHORD_STAGGER_SECS, COLUMN_STEP_SECS, COUNTERPOINT_INTERVAL,
    DEFAULT_SPEED, HIGHLIGHT_DURATION_SECS, NOTE_DURATION_SECS, ROW_STEP_SECS,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::music::pitch::{chord_for_tile, clamp_pitch, map_pitch, transform_pitch};
use crate::music::scale::{Scale, ScalePreset};
use crate::spatial::grid::{Grid, Tile};
use crate::spatial::transformation::Transformation;

/// Whether each tile sounds a single note or a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayMode {
    /// One note per tile
    #[default]
    Melody,
    /// Inverted chord per tile, tones staggered
    Harmony,
}

impl PlayMode {
    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Melody => "Melody",
            Self::Harmony => "Harmony",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayMode {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self> {
        [Self::Melody, Self::Harmony]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| invalid_parameter("play_mode", &s, &"expected Melody or Harmony"))
    }
}

/// Validated sonification parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    scale: Scale,
    transformation: Transformation,
    play_mode: PlayMode,
    speed: f64,
}

impl PlaybackConfig {
    /// Create and validate a playback configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `speed` is not a positive finite number
    pub fn new(
        scale: Scale,
        transformation: Transformation,
        play_mode: PlayMode,
        speed: f64,
    ) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(invalid_parameter(
                "speed",
                &speed,
                &"must be a positive finite number",
            ));
        }
        Ok(Self {
            scale,
            transformation,
            play_mode,
            speed,
        })
    }

    /// Scale tiles are mapped onto
    pub const fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Active transformation
    pub const fn transformation(&self) -> Transformation {
        self.transformation
    }

    /// Melody or harmony
    pub const fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    /// Tempo multiplier
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Copy with a different transformation
    #[must_use]
    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformation = transformation;
        self
    }

    fn scaled(&self, seconds: f64) -> Duration {
        Duration::try_from_secs_f64(seconds / self.speed).unwrap_or(Duration::MAX)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            scale: ScalePreset::default().scale(),
            transformation: Transformation::default(),
            play_mode: PlayMode::default(),
            speed: DEFAULT_SPEED,
        }
    }
}

/// Effect dispatched when its time is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start sounding a note
    NoteOn {
        /// Index of the note in [`Schedule::notes`]
        voice: usize,
        /// MIDI note number
        pitch: u8,
    },
    /// Stop sounding the note started under the same voice
    ///
    /// Overlapping notes of equal pitch end independently.
    NoteOff {
        /// Index of the note in [`Schedule::notes`]
        voice: usize,
        /// MIDI note number
        pitch: u8,
    },
    /// Highlight a tile
    HighlightOn {
        /// Tile column
        column: usize,
        /// Tile row
        row: usize,
    },
    /// Remove a tile highlight
    HighlightOff {
        /// Tile column
        column: usize,
        /// Tile row
        row: usize,
    },
}

/// Action with its offset from playback start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAction {
    /// Offset from playback start
    pub at: Duration,
    /// What happens
    pub action: Action,
}

/// One sounding note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// MIDI note number
    pub pitch: u8,
    /// Offset from playback start
    pub start: Duration,
    /// Sounding length
    pub duration: Duration,
}

/// Time-ordered playback plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    notes: Vec<NoteEvent>,
    actions: Vec<ScheduledAction>,
}

impl Schedule {
    /// Notes in the order they were planned, indexed by voice
    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    /// Actions ordered by time, ties kept in planning order
    pub fn actions(&self) -> &[ScheduledAction] {
        &self.actions
    }

    /// Number of actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing is scheduled
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Offset of the last action
    pub fn total_duration(&self) -> Duration {
        self.actions
            .last()
            .map_or(Duration::ZERO, |scheduled| scheduled.at)
    }

    /// Consume into the ordered actions
    pub fn into_actions(self) -> Vec<ScheduledAction> {
        self.actions
    }

    fn push_note(&mut self, pitch: u8, start: Duration, duration: Duration) {
        let voice = self.notes.len();
        self.notes.push(NoteEvent {
            pitch,
            start,
            duration,
        });
        self.push(start, Action::NoteOn { voice, pitch });
        self.push(
            start.saturating_add(duration),
            Action::NoteOff { voice, pitch },
        );
    }

    fn push_highlight(&mut self, tile: &Tile, start: Duration, duration: Duration) {
        let (column, row) = (tile.column, tile.row);
        self.push(start, Action::HighlightOn { column, row });
        self.push(
            start.saturating_add(duration),
            Action::HighlightOff { column, row },
        );
    }

    fn push(&mut self, at: Duration, action: Action) {
        self.actions.push(ScheduledAction { at, action });
    }
}

/// Plan playback of a grid
///
/// Tile `(column, row)` starts at `(row * 1.0 + column * 0.2) / speed`
/// seconds. Its pitch comes from the tile type through the scale and the
/// transformation; harmony mode sounds the chord on that pitch inverted by
/// `(row + column) mod 4`.
pub fn build_schedule(grid: &Grid, config: &PlaybackConfig) -> Schedule {
    let mut schedule = Schedule::default();
    let note_duration = config.scaled(NOTE_DURATION_SECS);
    let highlight_duration = config.scaled(HIGHLIGHT_DURATION_SECS);

    for tile in grid.tiles() {
        let start = tile_start(&tile, config);
        let index = tile.tile_type.index();
        let pitch = transform_pitch(index, &config.scale, config.transformation);

        match config.play_mode {
            PlayMode::Melody => schedule.push_note(pitch, start, note_duration),
            PlayMode::Harmony => {
                let mut offset = start;
                for note in chord_for_tile(pitch, tile.column, tile.row) {
                    schedule.push_note(note, offset, note_duration);
                    offset = offset.saturating_add(config.scaled(CHORD_STAGGER_SECS));
                }
            }
        }
        schedule.push_highlight(&tile, start, highlight_duration);
    }

    if config.transformation.layers_second_voice() {
        let lag = config.scaled(CANON_OFFSET_SECS);
        for tile in grid.tiles() {
            let start = tile_start(&tile, config).saturating_add(lag);
            let base = map_pitch(tile.tile_type.index(), &config.scale);
            let pitch = match config.transformation {
                Transformation::Counterpoint => {
                    clamp_pitch(usize::from(base) + usize::from(COUNTERPOINT_INTERVAL))
                }
                _ => base,
            };
            schedule.push_note(pitch, start, note_duration);
            schedule.push_highlight(&tile, start, highlight_duration);
        }
    }

    // Stable, so simultaneous actions keep planning order
    schedule.actions.sort_by_key(|scheduled| scheduled.at);
    schedule
}

fn tile_start(tile: &Tile, config: &PlaybackConfig) -> Duration {
    let seconds = (tile.row as f64).mul_add(ROW_STEP_SECS, tile.column as f64 * COLUMN_STEP_SECS);
    config.scaled(seconds)
}
