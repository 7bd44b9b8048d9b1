//! Musical mapping of tiles
//!
//! This module contains:
//! - Scales and the named presets
//! - Pitch mapping, chords and chord inversions

/// Pitch mapping and chords
pub mod pitch;
/// Scales and presets
pub mod scale;

pub use pitch::{chord, chord_for_tile, invert_chord, map_pitch, transform_pitch};
pub use scale::{Scale, ScalePreset};
