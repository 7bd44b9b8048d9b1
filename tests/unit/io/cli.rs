//! Tests for command-line parsing and the session runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use truchet_sonifier::MosaicError;
    use truchet_sonifier::io::cli::{Cli, SessionRunner, TracingSink};
    use truchet_sonifier::io::configuration::{
        DEFAULT_CANVAS_SIZE, DEFAULT_MOTIF_RATIO, DEFAULT_SEED, DEFAULT_TILE_SIZE,
    };
    use truchet_sonifier::playback::{AudioSink, PlayMode};
    use truchet_sonifier::spatial::Transformation;
    use truchet_sonifier::symmetry::SymmetryGroup;

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.symmetry, "D4");
        assert_eq!(cli.canvas, DEFAULT_CANVAS_SIZE);
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.motif_ratio, DEFAULT_MOTIF_RATIO);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.output, PathBuf::from("."));
        assert!(!cli.play);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming the transformation flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--symmetry",
            "p4g",
            "--canvas",
            "640",
            "--tile-size",
            "40",
            "--motif-ratio",
            "4",
            "--seed",
            "7",
            "--scale",
            "C Dorian",
            "--transformation",
            "canon",
            "--play-mode",
            "harmony",
            "--speed",
            "2",
            "--output",
            "out",
            "--play",
            "--quiet",
        ]);

        assert_eq!(cli.symmetry_group().ok(), Some(SymmetryGroup::P4g));
        assert_eq!(cli.canvas, 640);
        assert_eq!(cli.tile_size, 40);
        assert_eq!(cli.motif_ratio, 4);
        assert_eq!(cli.seed, 7);
        assert!(cli.play);
        assert!(!cli.should_show_progress());

        let playback = cli.playback_config().expect("arguments are valid");
        assert_eq!(playback.scale().name(), "C Dorian");
        assert_eq!(playback.transformation(), Transformation::Canon);
        assert_eq!(playback.play_mode(), PlayMode::Harmony);
        assert!((playback.speed() - 2.0).abs() < f64::EPSILON);
    }

    // Tests unknown symmetry tags surface as UnknownSymmetry
    // Verified by falling back to D4 on parse failure
    #[test]
    fn test_cli_rejects_unknown_symmetry() {
        let cli = Cli::parse_from(["program", "--symmetry", "p3m1"]);
        assert!(matches!(
            cli.symmetry_group(),
            Err(MosaicError::UnknownSymmetry { .. })
        ));
    }

    // Tests a non-positive speed is rejected before playback
    // Verified by removing the speed check in PlaybackConfig::new
    #[test]
    fn test_cli_rejects_zero_speed() {
        let cli = Cli::parse_from(["program", "--speed", "0"]);
        assert!(cli.playback_config().is_err());
    }

    // Tests output files are named from the settings slug
    // Verified by dropping the prefix
    #[test]
    fn test_output_path_uses_slug() {
        let path = SessionRunner::get_output_path(Path::new("out"), "D4_None_CMajor_sz80_mr2_sp1");
        assert_eq!(
            path,
            PathBuf::from("out/pattern-D4_None_CMajor_sz80_mr2_sp1.png")
        );
    }

    // Tests a run without playback writes the rendered pattern
    // Verified by returning the path without exporting
    #[test]
    fn test_session_writes_png() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().to_str().expect("utf-8 temp path").to_string();
        let cli = Cli::parse_from(["program", "--symmetry", "C4", "--quiet", "--output", &output]);

        let path = SessionRunner::new(cli).run().expect("session should succeed");

        assert!(path.exists());
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("pattern-C4_None_CMajor_sz80_mr2_sp1.png")
        );
        let img = image::open(&path).expect("png should load");
        assert_eq!((img.width(), img.height()), (320, 320));
    }

    // Tests a fast run with playback dispatches every note
    // Verified by breaking out of the loop after the first tick
    #[test]
    fn test_session_plays_to_completion() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().to_str().expect("utf-8 temp path").to_string();
        let cli = Cli::parse_from([
            "program",
            "--symmetry",
            "D2",
            "--canvas",
            "160",
            "--speed",
            "50",
            "--play",
            "--quiet",
            "--output",
            &output,
        ]);

        assert!(SessionRunner::new(cli).run().is_ok());
    }

    // Tests the tracing sink counts started notes only
    // Verified by counting note_off as well
    #[test]
    fn test_tracing_sink_counts_notes() {
        let mut sink = TracingSink::default();
        sink.note_on(0, 60);
        sink.note_off(0, 60);
        sink.note_on(1, 64);
        assert_eq!(sink.notes_played(), 2);
    }
}
