//! Sonification and playback control
//!
//! This module contains:
//! - Schedule construction from a grid and playback settings
//! - A cancellable transport driven by an injected clock
//! - The controller that ties the grid, transport and audio sink together

/// Pattern and playback owner
pub mod controller;
/// Grid-to-actions conversion
pub mod schedule;
/// Clock-driven dispatch cursor
pub mod transport;

pub use controller::{AudioSink, AudioState, Controller};
pub use schedule::{
    Action, NoteEvent, PlayMode, PlaybackConfig, Schedule, ScheduledAction, build_schedule,
};
pub use transport::{Transport, TransportState};
