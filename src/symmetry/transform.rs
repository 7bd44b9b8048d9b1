//! Four-state tile alphabet and the fixed permutations acting on it
//!
//! Each tile is a square split along one diagonal with one half filled.
//! Naming a tile by its filled corner makes every symmetry operation of the
//! square a plain relabelling of those four corners.

use crate::io::error::{MosaicError, Result};
use rand::Rng;
use std::fmt;

/// Orientation of the filled right triangle inside a square cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    /// Type 0: triangle filling the bottom-right corner
    #[default]
    BottomRight = 0,
    /// Type 1: triangle filling the top-left corner
    TopLeft = 1,
    /// Type 2: triangle filling the bottom-left corner
    BottomLeft = 2,
    /// Type 3: triangle filling the top-right corner
    TopRight = 3,
}

impl TileType {
    /// All tile types in index order
    pub const ALL: [Self; 4] = [
        Self::BottomRight,
        Self::TopLeft,
        Self::BottomLeft,
        Self::TopRight,
    ];

    /// Convert a raw index into a tile type
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileType` for values outside `0..4`
    pub const fn from_index(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Self::BottomRight),
            1 => Ok(Self::TopLeft),
            2 => Ok(Self::BottomLeft),
            3 => Ok(Self::TopRight),
            _ => Err(MosaicError::InvalidTileType { value }),
        }
    }

    /// Raw index of this tile type
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uniform draw over all four orientations
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..4_u8) {
            0 => Self::BottomRight,
            1 => Self::TopLeft,
            2 => Self::BottomLeft,
            _ => Self::TopRight,
        }
    }

    /// Fixed relabelling `t -> (3 - t) mod 4`
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::BottomRight => Self::TopRight,
            Self::TopLeft => Self::BottomLeft,
            Self::BottomLeft => Self::TopLeft,
            Self::TopRight => Self::BottomRight,
        }
    }

    /// Cyclic relabelling `t -> (t + 1) mod 4`
    #[must_use]
    pub const fn augmented(self) -> Self {
        match self {
            Self::BottomRight => Self::TopLeft,
            Self::TopLeft => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::TopRight => Self::BottomRight,
        }
    }
}

impl TryFrom<usize> for TileType {
    type Error = MosaicError;

    fn try_from(value: usize) -> Result<Self> {
        Self::from_index(value)
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Restricted alphabet for cells lying on a reflection axis
///
/// A cell that a reflection maps onto itself must hold a type the
/// reflection's permutation fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalPalette {
    /// Types 0 and 1, the fixed points of `MirrorDiagonal`
    Primary,
    /// Types 2 and 3, the fixed points of `MirrorDiagonal` followed by `Rotate180`
    Offset,
}

impl DiagonalPalette {
    /// The two admissible types
    pub const fn types(self) -> [TileType; 2] {
        match self {
            Self::Primary => [TileType::BottomRight, TileType::TopLeft],
            Self::Offset => [TileType::BottomLeft, TileType::TopRight],
        }
    }

    /// Uniform draw over the two admissible types
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> TileType {
        let [first, second] = self.types();
        if rng.random_range(0..2_u8) == 0 {
            first
        } else {
            second
        }
    }
}

/// Named permutation of the tile alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTransform {
    /// Leaves every type unchanged
    Identity,
    /// Quarter turn clockwise
    Rotate90Cw,
    /// Quarter turn counter-clockwise
    Rotate90Ccw,
    /// Half turn
    Rotate180,
    /// Left-right flip
    MirrorHorizontal,
    /// Top-bottom flip
    MirrorVertical,
    /// Reflection across the main diagonal
    MirrorDiagonal,
    /// Type part of a horizontal glide reflection (same permutation as `Rotate180`)
    GlideHorizontal,
    /// Type part of a vertical glide reflection (same permutation as `MirrorVertical`)
    GlideVertical,
}

impl TypeTransform {
    /// Every named transform
    pub const ALL: [Self; 9] = [
        Self::Identity,
        Self::Rotate90Cw,
        Self::Rotate90Ccw,
        Self::Rotate180,
        Self::MirrorHorizontal,
        Self::MirrorVertical,
        Self::MirrorDiagonal,
        Self::GlideHorizontal,
        Self::GlideVertical,
    ];

    /// Apply the permutation to one tile type
    pub const fn apply(self, tile: TileType) -> TileType {
        use TileType::{BottomLeft, BottomRight, TopLeft, TopRight};

        match self {
            Self::Identity => tile,
            Self::Rotate90Cw => match tile {
                BottomRight => BottomLeft,
                TopLeft => TopRight,
                BottomLeft => TopLeft,
                TopRight => BottomRight,
            },
            Self::Rotate90Ccw => match tile {
                BottomRight => TopRight,
                TopLeft => BottomLeft,
                BottomLeft => BottomRight,
                TopRight => TopLeft,
            },
            Self::Rotate180 | Self::GlideHorizontal => match tile {
                BottomRight => TopLeft,
                TopLeft => BottomRight,
                BottomLeft => TopRight,
                TopRight => BottomLeft,
            },
            Self::MirrorHorizontal => match tile {
                BottomRight => BottomLeft,
                TopLeft => TopRight,
                BottomLeft => BottomRight,
                TopRight => TopLeft,
            },
            Self::MirrorVertical | Self::GlideVertical => match tile {
                BottomRight => TopRight,
                TopLeft => BottomLeft,
                BottomLeft => TopLeft,
                TopRight => BottomRight,
            },
            Self::MirrorDiagonal => match tile {
                BottomRight => BottomRight,
                TopLeft => TopLeft,
                BottomLeft => TopRight,
                TopRight => BottomLeft,
            },
        }
    }

    /// Transform that undoes this one
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Rotate90Cw => Self::Rotate90Ccw,
            Self::Rotate90Ccw => Self::Rotate90Cw,
            other => other,
        }
    }

    /// Smallest `n > 0` such that applying the transform `n` times is the identity
    pub const fn order(self) -> usize {
        match self {
            Self::Identity => 1,
            Self::Rotate90Cw | Self::Rotate90Ccw => 4,
            _ => 2,
        }
    }
}

/// Apply a chain of transforms left to right
pub fn apply_chain(chain: &[TypeTransform], tile: TileType) -> TileType {
    chain
        .iter()
        .fold(tile, |current, transform| transform.apply(current))
}
