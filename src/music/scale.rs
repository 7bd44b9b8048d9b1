//! Scales and the named presets offered by the player

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MosaicError, Result, invalid_parameter};

/// Name given to scales built from raw notes
pub const CUSTOM_SCALE_NAME: &str = "Custom";

/// Non-empty ordered list of MIDI note numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    name: String,
    notes: Vec<u8>,
}

impl Scale {
    /// Create an unnamed scale from its degrees
    ///
    /// # Errors
    ///
    /// Returns `EmptyScale` if `notes` is empty
    pub fn new(notes: Vec<u8>) -> Result<Self> {
        Self::named(CUSTOM_SCALE_NAME, notes)
    }

    /// Create a named scale from its degrees
    ///
    /// # Errors
    ///
    /// Returns `EmptyScale` if `notes` is empty
    pub fn named(name: impl Into<String>, notes: Vec<u8>) -> Result<Self> {
        if notes.is_empty() {
            return Err(MosaicError::EmptyScale);
        }
        Ok(Self {
            name: name.into(),
            notes,
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with whitespace removed, used in filenames
    pub fn slug(&self) -> String {
        self.name.split_whitespace().collect()
    }

    /// Degrees in order
    pub fn notes(&self) -> &[u8] {
        &self.notes
    }

    /// Number of degrees
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the scale has no degrees, never true once constructed
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note at `index mod len`
    pub fn degree(&self, index: usize) -> u8 {
        let len = self.notes.len().max(1);
        self.notes.get(index % len).copied().unwrap_or_default()
    }

    /// First degree
    pub fn first(&self) -> u8 {
        self.degree(0)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<ScalePreset> for Scale {
    fn from(preset: ScalePreset) -> Self {
        Self {
            name: preset.name().to_string(),
            notes: preset.notes().to_vec(),
        }
    }
}

/// Named scales offered by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalePreset {
    /// Ionian on C
    #[default]
    CMajor,
    /// Natural minor on C
    CMinor,
    /// Five-note major on C
    CMajorPentatonic,
    /// Five-note minor on C
    CMinorPentatonic,
    /// Blues on C
    CBlues,
    /// Harmonic minor on C
    CHarmonicMinor,
    /// Lydian on C
    CLydian,
    /// Mixolydian on C
    CMixolydian,
    /// Dorian on C
    CDorian,
    /// Phrygian on C
    CPhrygian,
}

impl ScalePreset {
    /// Every preset in menu order
    pub const ALL: [Self; 10] = [
        Self::CMajor,
        Self::CMinor,
        Self::CMajorPentatonic,
        Self::CMinorPentatonic,
        Self::CBlues,
        Self::CHarmonicMinor,
        Self::CLydian,
        Self::CMixolydian,
        Self::CDorian,
        Self::CPhrygian,
    ];

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::CMajor => "C Major",
            Self::CMinor => "C Minor",
            Self::CMajorPentatonic => "C Major Pentatonic",
            Self::CMinorPentatonic => "C Minor Pentatonic",
            Self::CBlues => "C Blues",
            Self::CHarmonicMinor => "C Harmonic Minor",
            Self::CLydian => "C Lydian",
            Self::CMixolydian => "C Mixolydian",
            Self::CDorian => "C Dorian",
            Self::CPhrygian => "C Phrygian",
        }
    }

    /// Display name with spaces removed, used in filenames
    pub fn slug(self) -> String {
        self.name().replace(' ', "")
    }

    /// Scale degrees as MIDI note numbers
    pub const fn notes(self) -> &'static [u8] {
        match self {
            Self::CMajor => &[48, 60, 72, 84, 96, 108, 120],
            Self::CMinor => &[48, 51, 60, 63, 72, 75, 84],
            Self::CMajorPentatonic => &[48, 50, 52, 55, 57, 60, 62],
            Self::CMinorPentatonic => &[48, 51, 53, 55, 58, 60, 63],
            Self::CBlues => &[48, 51, 54, 55, 58, 60, 63],
            Self::CHarmonicMinor => &[48, 51, 54, 60, 64, 67, 72],
            Self::CLydian => &[48, 52, 56, 60, 64, 67, 71],
            Self::CMixolydian => &[48, 52, 55, 60, 64, 67, 69],
            Self::CDorian => &[48, 50, 53, 60, 62, 67, 69],
            Self::CPhrygian => &[48, 49, 53, 60, 63, 67, 72],
        }
    }

    /// Owned scale for this preset
    pub fn scale(self) -> Scale {
        Scale::from(self)
    }
}

impl fmt::Display for ScalePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalePreset {
    type Err = MosaicError;

    /// Accepts the display name or its slug, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();
        Self::ALL
            .into_iter()
            .find(|preset| preset.slug().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| invalid_parameter("scale", &s, &"unknown scale name"))
    }
}
