//! Symmetry group tags and their declarative construction recipes
//!
//! A recipe names the fundamental domain that is filled at random, the
//! ordered derivation steps that carry it through the group's orbit, and
//! how the resulting canvas is laid over the full grid. Point groups build
//! the full grid directly; wallpaper groups build one motif and tile it.

use std::fmt;
use std::str::FromStr;

use crate::io::error::MosaicError;
use crate::symmetry::transform::{DiagonalPalette, TypeTransform};

/// Supported planar symmetry groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetryGroup {
    /// Dihedral group of the square (four mirrors, quarter turns)
    D4,
    /// Cyclic group of quarter turns
    C4,
    /// Horizontal and vertical mirrors
    D2,
    /// Half turn
    C2,
    /// Single mirror with a vertical axis (left half reflected to the right)
    D1H,
    /// Single mirror with a horizontal axis (top half reflected to the bottom)
    D1V,
    /// Translations only
    P1,
    /// Half turns
    P2,
    /// Mirrors with horizontal axes
    PmH,
    /// Mirrors with vertical axes
    PmV,
    /// Glide reflections, staggered rows
    PgH,
    /// Mirrors with a centred (staggered) lattice
    CmS,
    /// Perpendicular mirrors
    Pmm,
    /// Mirror plus half turn, horizontal variant
    PmgH,
    /// Mirror plus half turn, vertical variant
    PmgV,
    /// Perpendicular glides with half turns
    Pgg,
    /// Perpendicular mirrors on a centred lattice
    Cmm,
    /// Quarter turns
    P4,
    /// Quarter turns with mirrors through the rotation centres
    P4m,
    /// Quarter turns with off-centre diagonal reflections
    P4g,
}

impl SymmetryGroup {
    /// Every group in menu order
    pub const ALL: [Self; 20] = [
        Self::D4,
        Self::C4,
        Self::D2,
        Self::C2,
        Self::D1H,
        Self::D1V,
        Self::P1,
        Self::P2,
        Self::PmH,
        Self::PmV,
        Self::PgH,
        Self::CmS,
        Self::Pmm,
        Self::PmgH,
        Self::PmgV,
        Self::Pgg,
        Self::Cmm,
        Self::P4,
        Self::P4m,
        Self::P4g,
    ];

    /// Canonical tag
    pub const fn tag(self) -> &'static str {
        match self {
            Self::D4 => "D4",
            Self::C4 => "C4",
            Self::D2 => "D2",
            Self::C2 => "C2",
            Self::D1H => "D1_h",
            Self::D1V => "D1_v",
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::PmH => "pm_h",
            Self::PmV => "pm_v",
            Self::PgH => "pg_h",
            Self::CmS => "cm_s",
            Self::Pmm => "pmm",
            Self::PmgH => "pmg_h",
            Self::PmgV => "pmg_v",
            Self::Pgg => "pgg",
            Self::Cmm => "cmm",
            Self::P4 => "p4",
            Self::P4m => "p4m",
            Self::P4g => "p4g",
        }
    }

    /// Whether the group repeats a motif across the grid
    pub const fn is_wallpaper(self) -> bool {
        !matches!(self.recipe().tiling, Tiling::Direct)
    }

    /// Whether the recipe needs a square canvas (quarter turns or diagonals)
    pub fn requires_square(self) -> bool {
        let recipe = self.recipe();
        matches!(recipe.domain, Region::LowerTriangle)
            || recipe.steps.iter().any(|step| step.map.requires_square())
    }

    /// Whether the recipe halves the canvas and so needs even dimensions
    pub fn requires_even_canvas(self) -> bool {
        !self.recipe().steps.is_empty()
    }

    /// Construction recipe for this group
    pub const fn recipe(self) -> &'static Recipe {
        match self {
            Self::D4 => &D4,
            Self::C4 => &C4,
            Self::D2 => &D2,
            Self::C2 => &C2,
            Self::D1H => &D1_H,
            Self::D1V => &D1_V,
            Self::P1 => &P1,
            Self::P2 => &P2,
            Self::PmH => &PM_H,
            Self::PmV => &PM_V,
            Self::PgH => &PG_H,
            Self::CmS => &CM_S,
            Self::Pmm => &PMM,
            Self::PmgH => &PMG_H,
            Self::PmgV => &PMG_V,
            Self::Pgg => &PGG,
            Self::Cmm => &CMM,
            Self::P4 => &P4,
            Self::P4m => &P4M,
            Self::P4g => &P4G,
        }
    }
}

impl fmt::Display for SymmetryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SymmetryGroup {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        // Older sketches called the two-mirror point group "D2_s"
        if tag == "D2_s" {
            return Ok(Self::D2);
        }
        Self::ALL
            .into_iter()
            .find(|group| group.tag() == tag)
            .ok_or_else(|| MosaicError::UnknownSymmetry {
                tag: tag.to_string(),
            })
    }
}

/// Quarter of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// `x < w/2`, `y < h/2`
    TopLeft,
    /// `x >= w/2`, `y < h/2`
    TopRight,
    /// `x < w/2`, `y >= h/2`
    BottomLeft,
    /// `x >= w/2`, `y >= h/2`
    BottomRight,
}

/// Subset of canvas cells used as a domain or as a step's source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Every cell
    Whole,
    /// `x < w/2`
    LeftHalf,
    /// `y < h/2`
    TopHalf,
    /// One quadrant
    Quadrant(Quadrant),
    /// Top-left quadrant cells on or below its main diagonal (`x <= y`)
    LowerTriangle,
}

impl Region {
    /// Whether `(x, y)` lies in the region of a `w x h` canvas
    pub const fn contains(self, x: usize, y: usize, w: usize, h: usize) -> bool {
        let left = x < w / 2;
        let top = y < h / 2;
        match self {
            Self::Whole => true,
            Self::LeftHalf => left,
            Self::TopHalf => top,
            Self::Quadrant(Quadrant::TopLeft) => left && top,
            Self::Quadrant(Quadrant::TopRight) => !left && top,
            Self::Quadrant(Quadrant::BottomLeft) => left && !top,
            Self::Quadrant(Quadrant::BottomRight) => !left && !top,
            Self::LowerTriangle => left && top && x <= y,
        }
    }

    /// Cells of the region in row-major order
    pub fn cells(self, w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..h)
            .flat_map(move |y| (0..w).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.contains(x, y, w, h))
    }
}

/// Cell permutation of a `w x h` canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateMap {
    /// `(x, y) -> (w-1-x, y)`
    MirrorHorizontal,
    /// `(x, y) -> (x, h-1-y)`
    MirrorVertical,
    /// `(x, y) -> (w-1-x, h-1-y)`
    Rotate180,
    /// `(x, y) -> (w-1-y, x)`
    Rotate90Cw,
    /// `(x, y) -> (y, h-1-x)`
    Rotate90Ccw,
    /// `(x, y) -> (y, x)`
    Transpose,
}

impl CoordinateMap {
    /// Image of `(x, y)`, `None` if it falls outside the canvas
    pub fn apply(self, x: usize, y: usize, w: usize, h: usize) -> Option<(usize, usize)> {
        let (nx, ny) = match self {
            Self::MirrorHorizontal => (w.checked_sub(x + 1)?, y),
            Self::MirrorVertical => (x, h.checked_sub(y + 1)?),
            Self::Rotate180 => (w.checked_sub(x + 1)?, h.checked_sub(y + 1)?),
            Self::Rotate90Cw => (w.checked_sub(y + 1)?, x),
            Self::Rotate90Ccw => (y, h.checked_sub(x + 1)?),
            Self::Transpose => (y, x),
        };
        (nx < w && ny < h).then_some((nx, ny))
    }

    /// Whether the map only permutes cells on a square canvas
    pub const fn requires_square(self) -> bool {
        matches!(self, Self::Rotate90Cw | Self::Rotate90Ccw | Self::Transpose)
    }
}

/// One derivation pass: every determined source cell writes its image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Cells read by the pass
    pub source: Region,
    /// Where each source cell is copied
    pub map: CoordinateMap,
    /// Type permutations applied left to right
    pub transforms: &'static [TypeTransform],
}

/// How a built canvas covers the full grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tiling {
    /// The canvas is the grid
    Direct,
    /// Motif repeated by `(x mod motif_cols, y mod motif_rows)`
    Periodic,
    /// Periodic, with odd rows shifted by half a motif width
    Staggered,
}

/// Declarative construction of one symmetry group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// Cells drawn at random
    pub domain: Region,
    /// Restricted draw for domain cells on the main diagonal
    pub diagonal: Option<DiagonalPalette>,
    /// Ordered derivation passes
    pub steps: &'static [Step],
    /// Placement of the built canvas
    pub tiling: Tiling,
}

const TL: Region = Region::Quadrant(Quadrant::TopLeft);
const TR: Region = Region::Quadrant(Quadrant::TopRight);
const BL: Region = Region::Quadrant(Quadrant::BottomLeft);
const BR: Region = Region::Quadrant(Quadrant::BottomRight);

const fn step(
    source: Region,
    map: CoordinateMap,
    transforms: &'static [TypeTransform],
) -> Step {
    Step {
        source,
        map,
        transforms,
    }
}

const MIRROR_H: &[TypeTransform] = &[TypeTransform::MirrorHorizontal];
const MIRROR_V: &[TypeTransform] = &[TypeTransform::MirrorVertical];
const MIRROR_D: &[TypeTransform] = &[TypeTransform::MirrorDiagonal];
const ROT_180: &[TypeTransform] = &[TypeTransform::Rotate180];
const ROT_CW: &[TypeTransform] = &[TypeTransform::Rotate90Cw];
const ROT_CCW: &[TypeTransform] = &[TypeTransform::Rotate90Ccw];
const ROT_CW_TWICE: &[TypeTransform] = &[TypeTransform::Rotate90Cw, TypeTransform::Rotate90Cw];
const GLIDE_H: &[TypeTransform] = &[TypeTransform::GlideHorizontal];
const GLIDE_V: &[TypeTransform] = &[TypeTransform::GlideVertical];
const OFFSET_DIAGONAL: &[TypeTransform] =
    &[TypeTransform::MirrorDiagonal, TypeTransform::Rotate180];

const D4: Recipe = Recipe {
    domain: Region::LowerTriangle,
    diagonal: Some(DiagonalPalette::Primary),
    steps: &[
        step(Region::LowerTriangle, CoordinateMap::Transpose, MIRROR_D),
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(Region::TopHalf, CoordinateMap::MirrorVertical, MIRROR_V),
    ],
    tiling: Tiling::Direct,
};

const C4: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::Rotate90Cw, ROT_CW),
        step(TR, CoordinateMap::Rotate90Cw, ROT_CW),
        step(BR, CoordinateMap::Rotate90Cw, ROT_CW),
    ],
    tiling: Tiling::Direct,
};

const D2: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(TL, CoordinateMap::MirrorVertical, MIRROR_V),
        step(TR, CoordinateMap::MirrorVertical, MIRROR_V),
    ],
    tiling: Tiling::Direct,
};

const C2: Recipe = Recipe {
    domain: Region::LeftHalf,
    diagonal: None,
    steps: &[step(Region::LeftHalf, CoordinateMap::Rotate180, ROT_180)],
    tiling: Tiling::Direct,
};

const D1_H: Recipe = Recipe {
    domain: Region::LeftHalf,
    diagonal: None,
    steps: &[step(
        Region::LeftHalf,
        CoordinateMap::MirrorHorizontal,
        MIRROR_H,
    )],
    tiling: Tiling::Direct,
};

const D1_V: Recipe = Recipe {
    domain: Region::TopHalf,
    diagonal: None,
    steps: &[step(Region::TopHalf, CoordinateMap::MirrorVertical, MIRROR_V)],
    tiling: Tiling::Direct,
};

const P1: Recipe = Recipe {
    domain: Region::Whole,
    diagonal: None,
    steps: &[],
    tiling: Tiling::Periodic,
};

const P2: Recipe = Recipe {
    domain: Region::LeftHalf,
    diagonal: None,
    steps: &[step(Region::LeftHalf, CoordinateMap::Rotate180, ROT_180)],
    tiling: Tiling::Periodic,
};

const PM_H: Recipe = Recipe {
    domain: Region::TopHalf,
    diagonal: None,
    steps: &[step(Region::TopHalf, CoordinateMap::MirrorVertical, MIRROR_V)],
    tiling: Tiling::Periodic,
};

const PM_V: Recipe = Recipe {
    domain: Region::LeftHalf,
    diagonal: None,
    steps: &[step(
        Region::LeftHalf,
        CoordinateMap::MirrorHorizontal,
        MIRROR_H,
    )],
    tiling: Tiling::Periodic,
};

const PG_H: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, GLIDE_H),
        step(Region::TopHalf, CoordinateMap::MirrorVertical, GLIDE_V),
    ],
    tiling: Tiling::Staggered,
};

const CM_S: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(Region::TopHalf, CoordinateMap::MirrorVertical, MIRROR_V),
    ],
    tiling: Tiling::Staggered,
};

const PMM: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(TL, CoordinateMap::MirrorVertical, MIRROR_V),
        step(TL, CoordinateMap::Rotate180, ROT_180),
    ],
    tiling: Tiling::Periodic,
};

const PMG_H: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, ROT_180),
        step(Region::TopHalf, CoordinateMap::MirrorVertical, MIRROR_V),
    ],
    tiling: Tiling::Periodic,
};

const PMG_V: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(TL, CoordinateMap::MirrorVertical, ROT_180),
        step(BL, CoordinateMap::MirrorHorizontal, MIRROR_H),
    ],
    tiling: Tiling::Periodic,
};

const PGG: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, GLIDE_H),
        step(TL, CoordinateMap::MirrorVertical, GLIDE_V),
        step(TL, CoordinateMap::Rotate180, ROT_180),
    ],
    tiling: Tiling::Staggered,
};

const CMM: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(TL, CoordinateMap::MirrorVertical, MIRROR_V),
        step(TL, CoordinateMap::Rotate180, ROT_180),
    ],
    tiling: Tiling::Staggered,
};

const P4: Recipe = Recipe {
    domain: TL,
    diagonal: None,
    steps: &[
        step(TL, CoordinateMap::Rotate90Cw, ROT_CW),
        step(TL, CoordinateMap::Rotate90Ccw, ROT_CCW),
        step(TL, CoordinateMap::Rotate180, ROT_180),
    ],
    tiling: Tiling::Periodic,
};

const P4M: Recipe = Recipe {
    domain: Region::LowerTriangle,
    diagonal: Some(DiagonalPalette::Primary),
    steps: &[
        step(Region::LowerTriangle, CoordinateMap::Transpose, MIRROR_D),
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(TL, CoordinateMap::MirrorVertical, MIRROR_V),
        step(TL, CoordinateMap::Rotate180, ROT_180),
    ],
    tiling: Tiling::Periodic,
};

const P4G: Recipe = Recipe {
    domain: Region::LowerTriangle,
    diagonal: Some(DiagonalPalette::Offset),
    steps: &[
        step(
            Region::LowerTriangle,
            CoordinateMap::Transpose,
            OFFSET_DIAGONAL,
        ),
        step(TL, CoordinateMap::MirrorHorizontal, MIRROR_H),
        step(TL, CoordinateMap::MirrorVertical, MIRROR_V),
        step(TL, CoordinateMap::Rotate180, ROT_CW_TWICE),
    ],
    tiling: Tiling::Periodic,
};
