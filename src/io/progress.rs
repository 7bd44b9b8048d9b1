//! Terminal progress display for running playback

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PLAYBACK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting dispatched playback actions
pub struct PlaybackProgress {
    bar: ProgressBar,
}

impl PlaybackProgress {
    /// Visible bar over `total` actions
    pub fn new(total: usize, label: &str) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PLAYBACK_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Bar that draws nothing, for quiet runs
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Report how many actions have been dispatched so far
    pub fn update(&self, dispatched: usize) {
        self.bar.set_position(dispatched as u64);
    }

    /// Actions reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total actions
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Close the bar at the last reported position, keeping it on screen
    pub fn finish(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}
