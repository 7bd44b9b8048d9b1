//! Command-line interface for generating, rendering and playing mosaics

use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_MOTIF_RATIO, DEFAULT_SEED, DEFAULT_SPEED, DEFAULT_SYMMETRY,
    DEFAULT_TILE_SIZE, OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::PlaybackProgress;
use crate::music::scale::ScalePreset;
use crate::playback::controller::{AudioSink, Controller};
use crate::playback::schedule::{PlayMode, PlaybackConfig};
use crate::spatial::transformation::Transformation;
use crate::symmetry::group::SymmetryGroup;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "truchet-sonifier")]
#[command(
    author,
    version,
    about = "Generate symmetric Truchet tile mosaics and play them as music"
)]
/// Command-line arguments for mosaic generation and playback
pub struct Cli {
    /// Symmetry group tag (D4, C4, D2, C2, D1_h, D1_v, p1, p2, pm_h, pm_v,
    /// pg_h, cm_s, pmm, pmg_h, pmg_v, pgg, cmm, p4, p4m, p4g)
    #[arg(short = 'y', long, default_value = DEFAULT_SYMMETRY)]
    pub symmetry: String,

    /// Canvas edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub canvas: usize,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Grid-to-motif ratio for wallpaper groups
    #[arg(short, long, default_value_t = DEFAULT_MOTIF_RATIO)]
    pub motif_ratio: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Scale preset name, e.g. "C Major" or CMinorPentatonic
    #[arg(long, default_value = "C Major")]
    pub scale: String,

    /// Transformation (None, Inversion, Retrograde, Augmentation, Canon, Counterpoint)
    #[arg(short = 'x', long, default_value = "None")]
    pub transformation: String,

    /// Play mode (Melody or Harmony)
    #[arg(long, default_value = "Melody")]
    pub play_mode: String,

    /// Playback speed multiplier
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f64,

    /// Directory the rendered PNG is written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Play the pattern after rendering it
    #[arg(short, long)]
    pub play: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Parse the symmetry tag
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymmetry` for unsupported tags
    pub fn symmetry_group(&self) -> Result<SymmetryGroup> {
        self.symmetry.parse()
    }

    /// Build the playback settings from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unknown scale, transformation or
    /// play mode, or a non-positive speed
    pub fn playback_config(&self) -> Result<PlaybackConfig> {
        let scale: ScalePreset = self.scale.parse()?;
        let transformation: Transformation = self.transformation.parse()?;
        let play_mode: PlayMode = self.play_mode.parse()?;
        PlaybackConfig::new(scale.scale(), transformation, play_mode, self.speed)
    }
}

/// Audio sink that reports notes through the log
#[derive(Debug, Default)]
pub struct TracingSink {
    notes_played: usize,
}

impl TracingSink {
    /// Number of notes started so far
    pub const fn notes_played(&self) -> usize {
        self.notes_played
    }
}

impl AudioSink for TracingSink {
    fn note_on(&mut self, voice: usize, pitch: u8) {
        self.notes_played += 1;
        debug!(voice, pitch, "note on");
    }

    fn note_off(&mut self, voice: usize, pitch: u8) {
        debug!(voice, pitch, "note off");
    }
}

/// Runs one generate, render and play session
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a new runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the pattern, write it as PNG and optionally play it
    ///
    /// Returns the path of the written image.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the image cannot be
    /// written or playback cannot start
    pub fn run(&self) -> Result<PathBuf> {
        let symmetry = self.cli.symmetry_group()?;
        let playback = self.cli.playback_config()?;
        let mut controller = Controller::new(
            symmetry,
            (self.cli.canvas, self.cli.canvas),
            self.cli.tile_size,
            self.cli.motif_ratio,
            playback,
            StdRng::seed_from_u64(self.cli.seed),
        )?;

        let output_path = Self::get_output_path(&self.cli.output, &controller.settings_slug());
        export_grid_as_png(controller.grid(), controller.tile_size(), &output_path)?;
        info!(path = %output_path.display(), "wrote pattern");

        if self.cli.play {
            // The command line invocation is the user gesture
            controller.resume_audio();
            let mut sink = TracingSink::default();
            self.play(&mut controller, &mut sink)?;
            info!(notes = sink.notes_played(), "playback finished");
        }

        Ok(output_path)
    }

    /// Drive playback in real time until the schedule is exhausted
    ///
    /// # Errors
    ///
    /// Returns `AudioInactive` if audio has not been resumed
    pub fn play<S: AudioSink>(
        &self,
        controller: &mut Controller<StdRng>,
        sink: &mut S,
    ) -> Result<()> {
        let clock = Instant::now();
        controller.play(clock.elapsed())?;

        let total = controller.transport().len();
        let progress = if self.cli.should_show_progress() {
            PlaybackProgress::new(total, &controller.settings_slug())
        } else {
            PlaybackProgress::hidden(total)
        };

        loop {
            controller.tick(clock.elapsed(), sink);
            progress.update(controller.transport().dispatched());
            if controller.is_finished() {
                break;
            }
            match controller.next_due(clock.elapsed()) {
                Some(wait) => std::thread::sleep(wait),
                None => break,
            }
        }

        progress.finish("done");
        Ok(())
    }

    /// Output file for a settings slug inside `directory`
    pub fn get_output_path(directory: &Path, slug: &str) -> PathBuf {
        directory.join(format!("{OUTPUT_PREFIX}-{slug}.png"))
    }
}
