//! Cancellable cursor over a schedule driven by an external clock
//!
//! The transport never reads a clock itself. Callers pass a monotonic
//! `now` to every time-dependent operation, so a real player can feed it
//! `Instant::elapsed` while tests feed fixed offsets.

use std::time::Duration;

use crate::playback::schedule::{Action, Schedule, ScheduledAction};

/// Playback state of a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    /// Not running; nothing will be dispatched
    #[default]
    Stopped,
    /// Running since `origin`, having already covered `offset` of the schedule
    Playing {
        /// Clock reading when playback last (re)started
        origin: Duration,
        /// Schedule position reached before `origin`
        offset: Duration,
    },
    /// Frozen at a schedule position
    Paused {
        /// Schedule position reached when paused
        position: Duration,
    },
}

/// Schedule plus dispatch cursor
#[derive(Debug, Clone, Default)]
pub struct Transport {
    actions: Vec<ScheduledAction>,
    cursor: usize,
    state: TransportState,
}

impl Transport {
    /// Stopped transport over a schedule
    pub fn new(schedule: Schedule) -> Self {
        Self {
            actions: schedule.into_actions(),
            cursor: 0,
            state: TransportState::Stopped,
        }
    }

    /// Replace the schedule, dropping anything still pending
    pub fn load(&mut self, schedule: Schedule) {
        *self = Self::new(schedule);
    }

    /// Current state
    pub const fn state(&self) -> TransportState {
        self.state
    }

    /// Whether actions are being dispatched
    pub const fn is_playing(&self) -> bool {
        matches!(self.state, TransportState::Playing { .. })
    }

    /// Whether playback is frozen
    pub const fn is_paused(&self) -> bool {
        matches!(self.state, TransportState::Paused { .. })
    }

    /// Start from the beginning of the schedule
    pub fn start(&mut self, now: Duration) {
        self.cursor = 0;
        self.state = TransportState::Playing {
            origin: now,
            offset: Duration::ZERO,
        };
    }

    /// Freeze at the current position
    ///
    /// Returns `false` if the transport was not playing.
    pub fn pause(&mut self, now: Duration) -> bool {
        match self.position(now) {
            Some(position) if self.is_playing() => {
                self.state = TransportState::Paused { position };
                true
            }
            _ => false,
        }
    }

    /// Continue from the paused position
    ///
    /// Returns `false` if the transport was not paused.
    pub fn resume(&mut self, now: Duration) -> bool {
        match self.state {
            TransportState::Paused { position } => {
                self.state = TransportState::Playing {
                    origin: now,
                    offset: position,
                };
                true
            }
            _ => false,
        }
    }

    /// Stop and drop every pending action
    ///
    /// Returns the number of actions that were still pending.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.pending();
        self.actions.clear();
        self.cursor = 0;
        self.state = TransportState::Stopped;
        dropped
    }

    /// Schedule position at `now`, `None` while stopped
    pub fn position(&self, now: Duration) -> Option<Duration> {
        match self.state {
            TransportState::Stopped => None,
            TransportState::Playing { origin, offset } => {
                Some(offset.saturating_add(now.saturating_sub(origin)))
            }
            TransportState::Paused { position } => Some(position),
        }
    }

    /// Every action due at `now` that has not been returned yet
    ///
    /// Nothing is returned unless the transport is playing.
    pub fn poll(&mut self, now: Duration) -> Vec<Action> {
        if !self.is_playing() {
            return Vec::new();
        }
        let Some(position) = self.position(now) else {
            return Vec::new();
        };

        let remaining = self.actions.get(self.cursor..).unwrap_or_default();
        let due = remaining
            .iter()
            .take_while(|scheduled| scheduled.at <= position)
            .count();
        let actions = remaining
            .iter()
            .take(due)
            .map(|scheduled| scheduled.action)
            .collect();
        self.cursor += due;
        actions
    }

    /// Wait until the next pending action, `None` if stopped, paused or finished
    pub fn next_due(&self, now: Duration) -> Option<Duration> {
        if !self.is_playing() {
            return None;
        }
        let position = self.position(now)?;
        self.actions
            .get(self.cursor)
            .map(|next| next.at.saturating_sub(position))
    }

    /// Number of actions not yet dispatched
    pub fn pending(&self) -> usize {
        self.actions.len().saturating_sub(self.cursor)
    }

    /// Number of actions already dispatched
    pub const fn dispatched(&self) -> usize {
        self.cursor
    }

    /// Total number of loaded actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no actions are loaded
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether every loaded action has been dispatched
    pub fn is_finished(&self) -> bool {
        self.pending() == 0
    }
}
