//! Post-generation relabelling and reordering of a finished grid

use ndarray::Axis;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{MosaicError, invalid_parameter};
use crate::spatial::grid::Grid;
use crate::symmetry::transform::TileType;

/// Musical transformation applied to the grid and to playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transformation {
    /// Play the pattern as generated
    #[default]
    None,
    /// Relabel `t -> (3 - t) mod 4`
    Inversion,
    /// Reverse every row
    Retrograde,
    /// Relabel `t -> (t + 1) mod 4`
    Augmentation,
    /// Second voice repeating the melody after a short delay
    Canon,
    /// Second voice a fifth above the melody
    Counterpoint,
}

impl Transformation {
    /// Every transformation in menu order
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Inversion,
        Self::Retrograde,
        Self::Augmentation,
        Self::Canon,
        Self::Counterpoint,
    ];

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Inversion => "Inversion",
            Self::Retrograde => "Retrograde",
            Self::Augmentation => "Augmentation",
            Self::Canon => "Canon",
            Self::Counterpoint => "Counterpoint",
        }
    }

    /// Whether playback adds a second, delayed voice
    pub const fn layers_second_voice(self) -> bool {
        matches!(self, Self::Canon | Self::Counterpoint)
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transformation {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                invalid_parameter(
                    "transformation",
                    &s,
                    &"expected one of None, Inversion, Retrograde, Augmentation, Canon, Counterpoint",
                )
            })
    }
}

/// Produce a new grid with the transformation applied
///
/// Canon and counterpoint only change playback, so they return an
/// unchanged copy. Highlights are not carried over.
pub fn apply_transformation(grid: &Grid, transformation: Transformation) -> Grid {
    let types = grid.tile_types();
    match transformation {
        Transformation::Inversion => Grid::from_types(types.mapv(TileType::inverted)),
        Transformation::Augmentation => Grid::from_types(types.mapv(TileType::augmented)),
        Transformation::Retrograde => {
            let mut reversed = types.clone();
            reversed.invert_axis(Axis(1));
            Grid::from_types(reversed)
        }
        Transformation::None | Transformation::Canon | Transformation::Counterpoint => {
            Grid::from_types(types.clone())
        }
    }
}
