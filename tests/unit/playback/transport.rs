//! Tests for clock-driven dispatch, pause and cancellation

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use truchet_sonifier::music::ScalePreset;
    use truchet_sonifier::playback::{
        Action, PlayMode, PlaybackConfig, Transport, TransportState, build_schedule,
    };
    use truchet_sonifier::spatial::{Grid, Transformation};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn transport() -> Transport {
        let grid = Grid::from_indices(2, 2, &[0, 1, 2, 3]).expect("valid indices");
        let config = PlaybackConfig::new(
            ScalePreset::CMajor.scale(),
            Transformation::None,
            PlayMode::Melody,
            1.0,
        )
        .expect("valid playback configuration");
        Transport::new(build_schedule(&grid, &config))
    }

    // Tests nothing is dispatched before start
    // Verified by treating Stopped like Playing in poll
    #[test]
    fn test_stopped_dispatches_nothing() {
        let mut transport = transport();
        assert!(transport.poll(ms(10_000)).is_empty());
        assert_eq!(transport.next_due(ms(0)), None);
        assert_eq!(transport.state(), TransportState::Stopped);
    }

    // Tests every action is dispatched exactly once
    // Verified by not advancing the cursor in poll
    #[test]
    fn test_each_action_once() {
        let mut transport = transport();
        let total = transport.len();
        transport.start(ms(100));

        let mut seen = Vec::new();
        for t in (100..=2_000).step_by(50) {
            seen.extend(transport.poll(ms(t)));
        }
        seen.extend(transport.poll(ms(2_000)));

        assert_eq!(seen.len(), total);
        assert!(transport.is_finished());
        assert_eq!(
            seen.first(),
            Some(&Action::NoteOn {
                voice: 0,
                pitch: 48
            })
        );
    }

    // Tests polling relative to the start offset
    // Verified by ignoring the origin in position
    #[test]
    fn test_poll_relative_to_origin() {
        let mut transport = transport();
        transport.start(ms(1_000));

        // t = 0 holds NoteOn and HighlightOn of the first tile
        assert_eq!(transport.poll(ms(1_000)).len(), 2);
        assert!(transport.poll(ms(1_100)).is_empty());
        assert_eq!(transport.next_due(ms(1_100)), Some(ms(100)));
    }

    // Tests pause freezes the position and resume continues from it in order
    // Verified by restarting from zero on resume
    #[test]
    fn test_pause_resume_preserves_order() {
        let mut reference = transport();
        reference.start(ms(0));
        let expected = reference.poll(ms(10_000));

        let mut transport = transport();
        transport.start(ms(0));
        let mut seen = transport.poll(ms(300));

        assert!(transport.pause(ms(300)));
        assert!(transport.is_paused());
        assert!(transport.poll(ms(5_000)).is_empty());
        assert_eq!(transport.next_due(ms(5_000)), None);

        assert!(transport.resume(ms(5_000)));
        // Resumed at 300 ms; the next action sits at 400 ms
        assert_eq!(transport.next_due(ms(5_000)), Some(ms(100)));
        seen.extend(transport.poll(ms(20_000)));

        assert_eq!(seen, expected);
    }

    // Tests pause and resume only act in the right state
    // Verified by letting resume start a stopped transport
    #[test]
    fn test_pause_resume_state_guards() {
        let mut transport = transport();
        assert!(!transport.pause(ms(0)));
        assert!(!transport.resume(ms(0)));
        transport.start(ms(0));
        assert!(!transport.resume(ms(10)));
        assert!(transport.pause(ms(10)));
        assert!(!transport.pause(ms(20)));
    }

    // Tests cancel drops everything pending
    // Verified by leaving the actions loaded on cancel
    #[test]
    fn test_cancel_drops_pending() {
        let mut transport = transport();
        let total = transport.len();
        transport.start(ms(0));
        let first = transport.poll(ms(0)).len();

        assert_eq!(transport.cancel(), total - first);
        assert_eq!(transport.pending(), 0);
        assert!(transport.poll(ms(60_000)).is_empty());
        assert_eq!(transport.state(), TransportState::Stopped);
    }
}
