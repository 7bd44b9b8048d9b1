//! Symmetric Truchet tile mosaics and their sonification
//!
//! A pattern is generated for one of twenty planar symmetry groups by
//! filling a fundamental domain at random and carrying it through the
//! group's orbit with fixed permutations of the four tile orientations.
//! The finished grid can be rendered to PNG and played as a schedule of
//! notes and highlight changes.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Scales, pitch mapping and chords
pub mod music;
/// Schedule construction, transport and playback control
pub mod playback;
/// Grid storage and post-generation transformations
pub mod spatial;
/// Symmetry groups, recipes and the pattern generator
pub mod symmetry;

pub use io::error::{MosaicError, Result};
