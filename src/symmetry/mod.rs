//! Symmetric pattern generation
//!
//! This module contains:
//! - The four-state tile alphabet and its permutations
//! - The symmetry group tags and their construction recipes
//! - The generator that runs a recipe and tiles its motif

/// Recipe-driven generation
pub mod generator;
/// Group tags and recipe table
pub mod group;
/// Tile alphabet and type permutations
pub mod transform;

pub use generator::{PatternConfig, generate};
pub use group::SymmetryGroup;
pub use transform::{TileType, TypeTransform};
