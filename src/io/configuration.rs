//! Generation and playback constants with runtime configuration defaults

// Canvas geometry
/// Default canvas edge length in pixels
pub const DEFAULT_CANVAS_SIZE: usize = 320;
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: usize = 80;
/// Default grid-to-motif ratio for translation groups
pub const DEFAULT_MOTIF_RATIO: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Number of distinct tile orientations
pub const TILE_ALPHABET_SIZE: usize = 4;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default symmetry group tag
pub const DEFAULT_SYMMETRY: &str = "D4";

// Pitch range (C2 to C7)
/// Lowest MIDI note a tile may map to
pub const MIN_PITCH: u8 = 36;
/// Highest MIDI note a tile may map to
pub const MAX_PITCH: u8 = 96;

// Playback timing at speed 1.0, in seconds
/// Delay between consecutive rows
pub const ROW_STEP_SECS: f64 = 1.0;
/// Delay between consecutive columns within a row
pub const COLUMN_STEP_SECS: f64 = 0.2;
/// Sounding length of every note
pub const NOTE_DURATION_SECS: f64 = 0.5;
/// How long a tile stays highlighted after it sounds
pub const HIGHLIGHT_DURATION_SECS: f64 = 0.2;
/// Spacing between chord tones in harmony mode
pub const CHORD_STAGGER_SECS: f64 = 0.2;
/// Lag of the second voice in canon and counterpoint
pub const CANON_OFFSET_SECS: f64 = 0.5;
/// Interval of the counterpoint voice above the melody, in semitones
pub const COUNTERPOINT_INTERVAL: u8 = 7;
/// Default playback speed multiplier
pub const DEFAULT_SPEED: f64 = 1.0;

// Rendering
/// Canvas background grey level
pub const BACKGROUND_LEVEL: u8 = 225;
/// Fill colour of tiles at rest
pub const TILE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Fill colour of highlighted tiles, indexed by tile type
pub const HIGHLIGHT_COLORS: [[u8; 4]; TILE_ALPHABET_SIZE] = [
    [0xFF, 0x63, 0x47, 255],
    [0x46, 0x82, 0xB4, 255],
    [0x32, 0xCD, 0x32, 255],
    [0xFF, 0xD7, 0x00, 255],
];

// Output settings
/// Prefix of rendered pattern filenames
pub const OUTPUT_PREFIX: &str = "pattern";
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "truchet_sonifier=info";
/// Width of the playback progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
