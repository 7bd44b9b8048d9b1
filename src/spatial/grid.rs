//! Tile grid storage and the construction arena used by the generator
//!
//! A [`Grid`] keeps separate 2D arrays for tile orientation and highlight
//! state, mirroring how the renderer and the playback layer touch different
//! aspects of the same cells. Grids are only ever produced complete: the
//! generator writes into a [`GridBuilder`], whose bitmask tracks which cells
//! have been determined, and converts it once every cell is set.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::symmetry::transform::TileType;

/// One cell of the mosaic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Column index (x)
    pub column: usize,
    /// Row index (y)
    pub row: usize,
    /// Orientation of the filled triangle
    pub tile_type: TileType,
    /// Whether playback currently highlights this tile
    pub highlighted: bool,
}

/// Fully populated `rows x cols` mosaic stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Tile orientations (indexed by `row`, `col`)
    tile_types: Array2<TileType>,

    /// Highlight flags written by playback and read by the renderer
    highlighted: Array2<bool>,
}

impl Grid {
    /// Build a grid from a complete array of tile types
    pub fn from_types(tile_types: Array2<TileType>) -> Self {
        let highlighted = Array2::from_elem(tile_types.dim(), false);
        Self {
            tile_types,
            highlighted,
        }
    }

    /// Build a grid by evaluating `f(column, row)` for every cell
    pub fn from_fn<F>(cols: usize, rows: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> TileType,
    {
        Self::from_types(Array2::from_shape_fn((rows, cols), |(row, col)| {
            f(col, row)
        }))
    }

    /// Build a grid from row-major raw type indices
    ///
    /// # Errors
    ///
    /// Returns an error if the value count does not match `cols * rows` or
    /// any value lies outside the tile alphabet
    pub fn from_indices(cols: usize, rows: usize, values: &[usize]) -> Result<Self> {
        if values.len() != cols * rows {
            return Err(invalid_parameter(
                "values",
                &values.len(),
                &format!("expected {} values for a {cols}x{rows} grid", cols * rows),
            ));
        }

        let types = values
            .iter()
            .map(|&value| TileType::from_index(value))
            .collect::<Result<Vec<_>>>()?;

        Array2::from_shape_vec((rows, cols), types)
            .map(Self::from_types)
            .map_err(|e| computation_error("grid construction", &e))
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.tile_types.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.tile_types.ncols()
    }

    /// Tile orientation at a cell, `None` outside the grid
    pub fn tile_type(&self, column: usize, row: usize) -> Option<TileType> {
        self.tile_types.get([row, column]).copied()
    }

    /// Full tile view of a cell, `None` outside the grid
    pub fn tile(&self, column: usize, row: usize) -> Option<Tile> {
        let tile_type = self.tile_type(column, row)?;
        let highlighted = self
            .highlighted
            .get([row, column])
            .copied()
            .unwrap_or(false);
        Some(Tile {
            column,
            row,
            tile_type,
            highlighted,
        })
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tile_types
            .indexed_iter()
            .map(|((row, column), &tile_type)| Tile {
                column,
                row,
                tile_type,
                highlighted: self
                    .highlighted
                    .get([row, column])
                    .copied()
                    .unwrap_or(false),
            })
    }

    /// Read-only access to the orientation array
    pub const fn tile_types(&self) -> &Array2<TileType> {
        &self.tile_types
    }

    /// Set the highlight flag of a cell
    ///
    /// Returns `false` if the cell lies outside the grid.
    pub fn set_highlighted(&mut self, column: usize, row: usize, highlighted: bool) -> bool {
        match self.highlighted.get_mut([row, column]) {
            Some(flag) => {
                *flag = highlighted;
                true
            }
            None => false,
        }
    }

    /// Whether a cell is highlighted
    pub fn is_highlighted(&self, column: usize, row: usize) -> bool {
        self.highlighted
            .get([row, column])
            .copied()
            .unwrap_or(false)
    }

    /// Drop every highlight
    pub fn clear_highlights(&mut self) {
        self.highlighted.fill(false);
    }

    /// Number of highlighted cells
    pub fn highlighted_count(&self) -> usize {
        self.highlighted.iter().filter(|&&flag| flag).count()
    }
}

/// Construction arena with an explicit record of determined cells
///
/// Every slot starts as a placeholder; only slots whose bit is set in the
/// mask carry a meaningful type. Writes to already determined slots are
/// refused so a derivation pass can never overwrite an earlier one.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    tile_types: Array2<TileType>,
    determined: BitVec,
    cols: usize,
    rows: usize,
}

impl GridBuilder {
    /// Create an arena with no determined cells
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            tile_types: Array2::from_elem((rows, cols), TileType::default()),
            determined: bitvec![0; cols * rows],
            cols,
            rows,
        }
    }

    /// Arena width
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Arena height
    pub const fn rows(&self) -> usize {
        self.rows
    }

    const fn slot(&self, column: usize, row: usize) -> Option<usize> {
        if column < self.cols && row < self.rows {
            Some(row * self.cols + column)
        } else {
            None
        }
    }

    /// Whether a cell has been determined
    pub fn is_determined(&self, column: usize, row: usize) -> bool {
        self.slot(column, row)
            .and_then(|slot| self.determined.get(slot).as_deref().copied())
            .unwrap_or(false)
    }

    /// Type of a determined cell, `None` while still undetermined
    pub fn get(&self, column: usize, row: usize) -> Option<TileType> {
        if self.is_determined(column, row) {
            self.tile_types.get([row, column]).copied()
        } else {
            None
        }
    }

    /// Determine a cell
    ///
    /// Returns `false` without writing if the cell is outside the arena or
    /// already determined.
    pub fn set(&mut self, column: usize, row: usize, tile_type: TileType) -> bool {
        let Some(slot) = self.slot(column, row) else {
            return false;
        };
        if self.is_determined(column, row) {
            return false;
        }
        match self.tile_types.get_mut([row, column]) {
            Some(cell) => {
                *cell = tile_type;
                self.determined.set(slot, true);
                true
            }
            None => false,
        }
    }

    /// Number of determined cells
    pub fn determined_count(&self) -> usize {
        self.determined.count_ones()
    }

    /// Whether every cell has been determined
    pub fn is_complete(&self) -> bool {
        self.determined.all()
    }

    /// Convert into a finished grid
    ///
    /// # Errors
    ///
    /// Returns a computation error if any cell is still undetermined
    pub fn finish(self) -> Result<Grid> {
        if !self.is_complete() {
            let missing = self.cols * self.rows - self.determined_count();
            return Err(computation_error(
                "grid construction",
                &format!(
                    "{missing} of {} cells left undetermined",
                    self.cols * self.rows
                ),
            ));
        }
        Ok(Grid::from_types(self.tile_types))
    }
}
