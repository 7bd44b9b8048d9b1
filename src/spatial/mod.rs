//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Grid storage and the construction arena
//! - Post-generation grid transformations

/// Grid storage and construction arena
pub mod grid;
/// Inversion, retrograde and augmentation of finished grids
pub mod transformation;

pub use grid::{Grid, GridBuilder, Tile};
pub use transformation::{Transformation, apply_transformation};
