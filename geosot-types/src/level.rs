use serde::{Deserialize, Serialize};
use std::fmt;

/// Deepest subdivision level of the grid.
pub const MAX_LEVEL: u8 = 32;

/// Shallowest precision at which a scalar code still carries a full
/// degree/minute/second triple.
pub const MIN_SCALAR_PRECISION: u8 = 21;

/// Which field of the degree/minute/second layout a level subdivides.
///
/// Levels 1..=9 split the sign and degree bits, 10..=15 the minute bits,
/// 16..=21 the second bits and 22..=32 the binary fraction of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelBand {
    /// Level 0, the whole globe.
    Root,
    Degree,
    Minute,
    Second,
    SubSecond,
}

impl LevelBand {
    /// Classify a level, or `None` when it is deeper than [`MAX_LEVEL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use geosot_types::level::LevelBand;
    ///
    /// assert_eq!(LevelBand::of(9), Some(LevelBand::Degree));
    /// assert_eq!(LevelBand::of(10), Some(LevelBand::Minute));
    /// assert_eq!(LevelBand::of(21), Some(LevelBand::Second));
    /// assert_eq!(LevelBand::of(33), None);
    /// ```
    pub fn of(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Root),
            1..=9 => Some(Self::Degree),
            10..=15 => Some(Self::Minute),
            16..=21 => Some(Self::Second),
            22..=MAX_LEVEL => Some(Self::SubSecond),
            _ => None,
        }
    }
}

/// Nominal edge length of a cell at `level`, in degrees.
///
/// Cells at minute and second levels that straddle the 60th minute or second
/// are shorter than this nominal size.
///
/// # Examples
///
/// ```
/// use geosot_types::level::cell_size_degrees;
///
/// assert_eq!(cell_size_degrees(9), Some(1.0));
/// assert_eq!(cell_size_degrees(15), Some(1.0 / 60.0));
/// assert_eq!(cell_size_degrees(21), Some(1.0 / 3600.0));
/// assert_eq!(cell_size_degrees(40), None);
/// ```
pub fn cell_size_degrees(level: u8) -> Option<f64> {
    let band = LevelBand::of(level)?;
    let level = i32::from(level);
    Some(match band {
        LevelBand::Root | LevelBand::Degree => 2f64.powi(9 - level),
        LevelBand::Minute => 2f64.powi(15 - level) / 60.0,
        LevelBand::Second | LevelBand::SubSecond => 2f64.powi(21 - level) / 3600.0,
    })
}

/// A validated subdivision level in `0..=32`.
///
/// Deserializing an out-of-range value fails instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const ROOT: Level = Level(0);
    pub const MAX: Level = Level(MAX_LEVEL);

    /// Create a level, returning `None` above [`MAX_LEVEL`].
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_LEVEL {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn band(self) -> LevelBand {
        match LevelBand::of(self.0) {
            Some(band) => band,
            None => unreachable!("level {} validated on construction", self.0),
        }
    }

    /// Nominal cell edge length at this level, in degrees.
    pub fn cell_size_degrees(self) -> f64 {
        cell_size_degrees(self.0).unwrap_or(0.0)
    }

    /// The next shallower level, `None` at the root.
    pub fn parent(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// The next deeper level, `None` at [`MAX_LEVEL`].
    pub fn child(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

/// Error returned when a raw value is not a valid [`Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutOfRange(pub u8);

impl fmt::Display for LevelOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} outside range [0, {}]", self.0, MAX_LEVEL)
    }
}

impl std::error::Error for LevelOutOfRange {}

impl TryFrom<u8> for Level {
    type Error = LevelOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(LevelOutOfRange(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
