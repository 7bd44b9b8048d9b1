//! Owner of the current pattern and its playback
//!
//! The controller keeps the generated grid, the transformed grid that is
//! shown and played, and the transport. Any change that invalidates the
//! grid also cancels the transport, so stale actions never reach a new
//! pattern.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::io::error::{MosaicError, Result};
use crate::playback::schedule::{Action, PlaybackConfig, build_schedule};
use crate::playback::transport::Transport;
use crate::spatial::grid::Grid;
use crate::spatial::transformation::{Transformation, apply_transformation};
use crate::symmetry::generator::{PatternConfig, generate};
use crate::symmetry::group::SymmetryGroup;

/// Receiver of note actions, implemented by the audio engine
///
/// `voice` identifies one scheduled note; `note_off` releases only the note
/// started under the same voice, even when other voices share its pitch.
pub trait AudioSink {
    /// Start sounding a MIDI note
    fn note_on(&mut self, voice: usize, pitch: u8);
    /// Stop sounding the note started under `voice`
    fn note_off(&mut self, voice: usize, pitch: u8);
}

/// Whether the audio engine may produce sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioState {
    /// Waiting for a user gesture
    #[default]
    Suspended,
    /// Allowed to play
    Running,
}

/// Current pattern, playback settings and transport
#[derive(Debug)]
pub struct Controller<R: Rng> {
    pattern: PatternConfig,
    playback: PlaybackConfig,
    canvas: (usize, usize),
    tile_size: usize,
    base_grid: Grid,
    grid: Grid,
    transport: Transport,
    audio: AudioState,
    rng: R,
}

impl<R: Rng> Controller<R> {
    /// Generate the first pattern on a `width x height` pixel canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the derived pattern configuration is invalid
    pub fn new(
        symmetry: SymmetryGroup,
        canvas: (usize, usize),
        tile_size: usize,
        motif_ratio: usize,
        playback: PlaybackConfig,
        mut rng: R,
    ) -> Result<Self> {
        let pattern =
            PatternConfig::from_canvas(symmetry, canvas.0, canvas.1, tile_size, motif_ratio)?;
        let base_grid = generate(&pattern, &mut rng)?;
        let grid = apply_transformation(&base_grid, playback.transformation());
        info!(
            symmetry = %symmetry,
            cols = pattern.cols(),
            rows = pattern.rows(),
            "generated initial pattern"
        );
        Ok(Self {
            pattern,
            playback,
            canvas,
            tile_size,
            base_grid,
            grid,
            transport: Transport::default(),
            audio: AudioState::Suspended,
            rng,
        })
    }

    /// Draw a fresh pattern with the current settings
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails
    pub fn regenerate(&mut self) -> Result<()> {
        self.install(self.pattern)
    }

    /// Switch symmetry group and regenerate
    ///
    /// # Errors
    ///
    /// Returns an error if the current dimensions do not suit the group;
    /// the previous pattern is kept in that case
    pub fn set_symmetry(&mut self, symmetry: SymmetryGroup) -> Result<()> {
        let pattern = PatternConfig::new(
            symmetry,
            self.pattern.cols(),
            self.pattern.rows(),
            self.pattern.motif_ratio(),
        )?;
        self.install(pattern)
    }

    /// Change the tile size, which changes the grid dimensions, and regenerate
    ///
    /// # Errors
    ///
    /// Returns an error if the derived dimensions are invalid; the previous
    /// pattern is kept in that case
    pub fn set_tile_size(&mut self, tile_size: usize) -> Result<()> {
        let pattern = PatternConfig::from_canvas(
            self.pattern.symmetry(),
            self.canvas.0,
            self.canvas.1,
            tile_size,
            self.pattern.motif_ratio(),
        )?;
        self.install(pattern)?;
        self.tile_size = tile_size;
        Ok(())
    }

    /// Change the grid-to-motif ratio and regenerate
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio does not suit the grid; the previous
    /// pattern is kept in that case
    pub fn set_motif_ratio(&mut self, motif_ratio: usize) -> Result<()> {
        let pattern = PatternConfig::new(
            self.pattern.symmetry(),
            self.pattern.cols(),
            self.pattern.rows(),
            motif_ratio,
        )?;
        self.install(pattern)
    }

    /// Re-derive the shown grid from the generated one
    pub fn set_transformation(&mut self, transformation: Transformation) {
        self.cancel_pending("transformation changed");
        self.playback = self.playback.clone().with_transformation(transformation);
        self.grid = apply_transformation(&self.base_grid, transformation);
        debug!(%transformation, "applied transformation");
    }

    /// Replace the playback settings
    pub fn set_playback(&mut self, playback: PlaybackConfig) {
        self.cancel_pending("playback settings changed");
        if playback.transformation() != self.playback.transformation() {
            self.grid = apply_transformation(&self.base_grid, playback.transformation());
        }
        self.playback = playback;
    }

    /// Activate audio after a user gesture
    pub fn resume_audio(&mut self) {
        if self.audio == AudioState::Suspended {
            info!("audio activated");
        }
        self.audio = AudioState::Running;
    }

    /// Schedule the current grid and start playing at `now`
    ///
    /// # Errors
    ///
    /// Returns `AudioInactive` until [`Controller::resume_audio`] has been called
    pub fn play(&mut self, now: Duration) -> Result<()> {
        if self.audio != AudioState::Running {
            return Err(MosaicError::AudioInactive);
        }
        self.cancel_pending("restarting playback");
        self.grid.clear_highlights();
        let schedule = build_schedule(&self.grid, &self.playback);
        info!(
            actions = schedule.len(),
            notes = schedule.notes().len(),
            scale = %self.playback.scale(),
            transformation = %self.playback.transformation(),
            speed = self.playback.speed(),
            "playback started"
        );
        self.transport.load(schedule);
        self.transport.start(now);
        Ok(())
    }

    /// Freeze playback, returning `false` if nothing was playing
    pub fn pause(&mut self, now: Duration) -> bool {
        let paused = self.transport.pause(now);
        if paused {
            debug!(pending = self.transport.pending(), "playback paused");
        }
        paused
    }

    /// Continue paused playback, returning `false` if nothing was paused
    pub fn resume(&mut self, now: Duration) -> bool {
        let resumed = self.transport.resume(now);
        if resumed {
            debug!(pending = self.transport.pending(), "playback resumed");
        }
        resumed
    }

    /// Cancel playback, clear highlights and suspend audio
    pub fn stop(&mut self) {
        self.cancel_pending("stopped");
        self.grid.clear_highlights();
        self.audio = AudioState::Suspended;
        info!("playback stopped");
    }

    /// Dispatch every action due at `now`
    ///
    /// Highlight actions update the grid; note actions go to `sink`.
    /// Returns the number of dispatched actions.
    pub fn tick<S: AudioSink + ?Sized>(&mut self, now: Duration, sink: &mut S) -> usize {
        let actions = self.transport.poll(now);
        for action in &actions {
            match *action {
                Action::NoteOn { voice, pitch } => sink.note_on(voice, pitch),
                Action::NoteOff { voice, pitch } => sink.note_off(voice, pitch),
                Action::HighlightOn { column, row } => {
                    self.grid.set_highlighted(column, row, true);
                }
                Action::HighlightOff { column, row } => {
                    self.grid.set_highlighted(column, row, false);
                }
            }
        }
        actions.len()
    }

    /// Wait until the next pending action
    pub fn next_due(&self, now: Duration) -> Option<Duration> {
        self.transport.next_due(now)
    }

    /// Whether playback is running
    pub const fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    /// Whether every scheduled action has been dispatched
    pub fn is_finished(&self) -> bool {
        self.transport.is_finished()
    }

    /// Grid as shown and played
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid as generated, before any transformation
    pub const fn base_grid(&self) -> &Grid {
        &self.base_grid
    }

    /// Current pattern configuration
    pub const fn pattern(&self) -> &PatternConfig {
        &self.pattern
    }

    /// Current playback configuration
    pub const fn playback(&self) -> &PlaybackConfig {
        &self.playback
    }

    /// Transport state and counters
    pub const fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Audio activation state
    pub const fn audio_state(&self) -> AudioState {
        self.audio
    }

    /// Tile edge length in pixels
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Filename-safe summary of the current settings
    ///
    /// `{symmetry}_{transformation}_{scale}_sz{tile}_mr{ratio}_sp{speed}`
    pub fn settings_slug(&self) -> String {
        format!(
            "{}_{}_{}_sz{}_mr{}_sp{}",
            self.pattern.symmetry(),
            self.playback.transformation(),
            self.playback.scale().slug(),
            self.tile_size,
            self.pattern.motif_ratio(),
            self.playback.speed()
        )
    }

    fn install(&mut self, pattern: PatternConfig) -> Result<()> {
        let base_grid = generate(&pattern, &mut self.rng)?;
        self.cancel_pending("pattern regenerated");
        self.grid = apply_transformation(&base_grid, self.playback.transformation());
        self.base_grid = base_grid;
        self.pattern = pattern;
        info!(
            symmetry = %pattern.symmetry(),
            cols = pattern.cols(),
            rows = pattern.rows(),
            motif_ratio = pattern.motif_ratio(),
            "regenerated pattern"
        );
        Ok(())
    }

    fn cancel_pending(&mut self, reason: &'static str) {
        let dropped = self.transport.cancel();
        if dropped > 0 {
            debug!(dropped, reason, "cancelled pending actions");
        }
    }
}
