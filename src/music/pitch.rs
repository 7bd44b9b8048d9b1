//! Tile-to-pitch mapping, chords and playback pitch transformations
//!
//! All results stay inside the playable range `[MIN_PITCH, MAX_PITCH]`.

use crate::io::configuration::{MAX_PITCH, MIN_PITCH};
use crate::music::scale::Scale;
use crate::spatial::transformation::Transformation;

const OCTAVE: usize = 12;

/// Semitone offsets of the chord built on every root
pub const CHORD_INTERVALS: [u8; 4] = [0, 4, 7, 12];

/// Clamp a raw pitch into the playable range
pub fn clamp_pitch(pitch: usize) -> u8 {
    u8::try_from(pitch.clamp(usize::from(MIN_PITCH), usize::from(MAX_PITCH))).unwrap_or(MAX_PITCH)
}

/// Map an index to `scale[index mod len]` raised one octave per full pass
///
/// ```
/// use truchet_sonifier::music::{ScalePreset, map_pitch};
///
/// assert_eq!(map_pitch(5, &ScalePreset::CMajor.scale()), 96);
/// ```
pub fn map_pitch(index: usize, scale: &Scale) -> u8 {
    let len = scale.len().max(1);
    let octave = (index / len).saturating_mul(OCTAVE);
    clamp_pitch(usize::from(scale.degree(index)).saturating_add(octave))
}

/// Root position chord on `root`
pub fn chord(root: u8) -> [u8; 4] {
    CHORD_INTERVALS.map(|interval| root.saturating_add(interval))
}

/// Move the `level mod len` lowest tones up an octave to the end
pub fn invert_chord(notes: &[u8], level: usize) -> Vec<u8> {
    if notes.is_empty() {
        return Vec::new();
    }
    let split = level % notes.len();
    let (lowered, kept) = notes.split_at(split);
    kept.iter()
        .copied()
        .chain(lowered.iter().map(|&note| note.saturating_add(12)))
        .collect()
}

/// Chord on `root` inverted by the tile position, `(row + column) mod 4`
pub fn chord_for_tile(root: u8, column: usize, row: usize) -> Vec<u8> {
    invert_chord(&chord(root), row + column)
}

/// Apply the playback pitch transformation for a tile index
///
/// Inversion reflects the mapped pitch around the scale's first degree,
/// retrograde reads the scale from its top degree downwards and
/// augmentation adds an octave. Other transformations leave the pitch as
/// [`map_pitch`] returns it.
pub fn transform_pitch(index: usize, scale: &Scale, transformation: Transformation) -> u8 {
    let base = usize::from(scale.first());
    let len = scale.len().max(1);
    match transformation {
        Transformation::Inversion => {
            let first = usize::from(map_pitch(index, scale));
            clamp_pitch((2 * base).saturating_sub(first))
        }
        Transformation::Retrograde => {
            let degree = scale.degree(len - 1 - index % len);
            clamp_pitch(usize::from(degree) + (index / len).saturating_mul(OCTAVE))
        }
        Transformation::Augmentation => {
            clamp_pitch(usize::from(map_pitch(index, scale)) + OCTAVE)
        }
        Transformation::None | Transformation::Canon | Transformation::Counterpoint => {
            map_pitch(index, scale)
        }
    }
}
