//! Tests for the playback progress bar

#[cfg(test)]
mod tests {
    use truchet_sonifier::io::progress::PlaybackProgress;

    // Tests hidden bars track length and position, and finishing keeps a partial position
    // Verified by closing the bar with finish_with_message
    #[test]
    fn test_hidden_progress_tracks_position() {
        let progress = PlaybackProgress::hidden(12);
        assert_eq!(progress.length(), Some(12));

        progress.update(5);
        assert_eq!(progress.position(), 5);

        progress.finish("done");
        assert_eq!(progress.position(), 5);
    }

    // Tests a bar finished after every action reports the full length
    // Verified by resetting the position in finish
    #[test]
    fn test_finish_after_full_dispatch() {
        let progress = PlaybackProgress::hidden(4);
        progress.update(4);
        progress.finish("done");
        assert_eq!(progress.position(), 4);
        assert_eq!(progress.length(), Some(4));
    }

    // Tests visible bars start at zero with the requested length
    // Verified by constructing the bar with length 0
    #[test]
    fn test_visible_progress_initial_state() {
        let progress = PlaybackProgress::new(3, "D4_None");
        assert_eq!(progress.length(), Some(3));
        assert_eq!(progress.position(), 0);
    }
}
