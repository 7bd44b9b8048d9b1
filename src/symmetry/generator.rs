//! Recipe-driven pattern generation
//!
//! Every group is built the same way: draw the recipe's domain at random,
//! run its derivation steps over a [`GridBuilder`], then lay the finished
//! canvas over the grid. Point groups use the grid itself as the canvas;
//! wallpaper groups build one motif and repeat it.

use rand::Rng;
use tracing::debug;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::grid::{Grid, GridBuilder};
use crate::symmetry::group::{Recipe, SymmetryGroup, Tiling};
use crate::symmetry::transform::{TileType, apply_chain};

/// Validated generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    symmetry: SymmetryGroup,
    cols: usize,
    rows: usize,
    motif_ratio: usize,
}

impl PatternConfig {
    /// Create and validate a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - Either dimension is zero, odd or above the grid limit
    /// - A quarter-turn or diagonal point group gets a non-square grid
    /// - A wallpaper group's motif ratio is zero or does not divide both dimensions
    /// - The resulting motif is odd-sized (or non-square for `p4`, `p4m`, `p4g`)
    pub fn new(
        symmetry: SymmetryGroup,
        cols: usize,
        rows: usize,
        motif_ratio: usize,
    ) -> Result<Self> {
        let config = Self {
            symmetry,
            cols,
            rows,
            motif_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Derive the grid size from a canvas in pixels and a tile size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile size is zero or the derived
    /// dimensions fail [`PatternConfig::new`]
    pub fn from_canvas(
        symmetry: SymmetryGroup,
        width: usize,
        height: usize,
        tile_size: usize,
        motif_ratio: usize,
    ) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be positive",
            ));
        }
        Self::new(
            symmetry,
            width / tile_size,
            height / tile_size,
            motif_ratio,
        )
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [("cols", self.cols), ("rows", self.rows)] {
            if value == 0 || value % 2 != 0 {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &"must be a positive even number",
                ));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !self.symmetry.is_wallpaper() {
            if self.symmetry.requires_square() && self.cols != self.rows {
                return Err(invalid_parameter(
                    "rows",
                    &self.rows,
                    &format!("{} needs a square grid, got {} columns", self.symmetry, self.cols),
                ));
            }
            return Ok(());
        }

        let ratio = self.motif_ratio;
        if ratio == 0 || self.cols % ratio != 0 || self.rows % ratio != 0 {
            return Err(invalid_parameter(
                "motif_ratio",
                &ratio,
                &format!("must be positive and divide {}x{}", self.cols, self.rows),
            ));
        }

        let (motif_cols, motif_rows) = self.motif_dims();
        if self.symmetry.requires_even_canvas() && (motif_cols % 2 != 0 || motif_rows % 2 != 0) {
            return Err(invalid_parameter(
                "motif_ratio",
                &ratio,
                &format!("{} needs an even motif, got {motif_cols}x{motif_rows}", self.symmetry),
            ));
        }
        if self.symmetry.requires_square() && motif_cols != motif_rows {
            return Err(invalid_parameter(
                "motif_ratio",
                &ratio,
                &format!("{} needs a square motif, got {motif_cols}x{motif_rows}", self.symmetry),
            ));
        }
        Ok(())
    }

    /// Target symmetry group
    pub const fn symmetry(&self) -> SymmetryGroup {
        self.symmetry
    }

    /// Grid width in tiles
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in tiles
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Grid-to-motif size ratio
    pub const fn motif_ratio(&self) -> usize {
        self.motif_ratio
    }

    /// Size of the canvas the recipe is run on
    ///
    /// The motif for wallpaper groups, the whole grid for point groups.
    pub const fn motif_dims(&self) -> (usize, usize) {
        if self.symmetry.is_wallpaper() && self.motif_ratio > 0 {
            (self.cols / self.motif_ratio, self.rows / self.motif_ratio)
        } else {
            (self.cols, self.rows)
        }
    }
}

/// Generate a fully populated grid with the configured symmetry
///
/// # Errors
///
/// Returns a computation error if the recipe leaves a cell undetermined,
/// which would indicate a recipe that does not cover its canvas
pub fn generate<R: Rng + ?Sized>(config: &PatternConfig, rng: &mut R) -> Result<Grid> {
    let recipe = config.symmetry.recipe();
    let (motif_cols, motif_rows) = config.motif_dims();

    let canvas = build_canvas(recipe, motif_cols, motif_rows, rng)?;
    debug!(
        symmetry = %config.symmetry,
        motif_cols,
        motif_rows,
        cols = config.cols,
        rows = config.rows,
        "built symmetric canvas"
    );

    tile_canvas(&canvas, recipe.tiling, config.cols, config.rows)
}

/// Fill the recipe's domain and run its derivation steps on a `w x h` canvas
///
/// # Errors
///
/// Returns a computation error if any cell is still undetermined afterwards
pub fn build_canvas<R: Rng + ?Sized>(
    recipe: &Recipe,
    w: usize,
    h: usize,
    rng: &mut R,
) -> Result<Grid> {
    let mut builder = GridBuilder::new(w, h);

    for (x, y) in recipe.domain.cells(w, h) {
        let tile = match recipe.diagonal {
            Some(palette) if x == y => palette.draw(rng),
            _ => TileType::random(rng),
        };
        builder.set(x, y, tile);
    }

    for step in recipe.steps {
        let sources: Vec<_> = step
            .source
            .cells(w, h)
            .filter_map(|(x, y)| builder.get(x, y).map(|tile| (x, y, tile)))
            .collect();
        for (x, y, tile) in sources {
            if let Some((tx, ty)) = step.map.apply(x, y, w, h) {
                builder.set(tx, ty, apply_chain(step.transforms, tile));
            }
        }
    }

    builder.finish()
}

/// Lay a finished canvas over a `cols x rows` grid
///
/// # Errors
///
/// Returns a computation error if the canvas is empty
pub fn tile_canvas(canvas: &Grid, tiling: Tiling, cols: usize, rows: usize) -> Result<Grid> {
    let (motif_cols, motif_rows) = (canvas.cols(), canvas.rows());
    if motif_cols == 0 || motif_rows == 0 {
        return Err(computation_error(
            "motif tiling",
            &"canvas has no cells",
        ));
    }
    if tiling == Tiling::Direct && (motif_cols, motif_rows) == (cols, rows) {
        return Ok(canvas.clone());
    }

    let mut missing = false;
    let grid = Grid::from_fn(cols, rows, |x, y| {
        let shift = match tiling {
            Tiling::Staggered => (y % 2) * (motif_cols / 2),
            Tiling::Direct | Tiling::Periodic => 0,
        };
        canvas
            .tile_type((x + shift) % motif_cols, y % motif_rows)
            .unwrap_or_else(|| {
                missing = true;
                TileType::default()
            })
    });

    if missing {
        return Err(computation_error(
            "motif tiling",
            &"motif lookup fell outside the canvas",
        ));
    }
    Ok(grid)
}
