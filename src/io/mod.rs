//! Input/output operations and error handling
//!
//! This module contains:
//! - The crate error type and result alias
//! - Generation, playback and rendering constants
//! - Command-line parsing and the session runner
//! - PNG rendering and the playback progress bar

/// Command-line interface and session runner
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Triangle rasterisation and PNG export
pub mod image;
/// Playback progress display
pub mod progress;
