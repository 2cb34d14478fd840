//! Grid cells and hierarchy navigation.
//!
//! A [`GeoSotCell`] stores its code aligned at bit 0: a cell at level `L` has
//! exactly `2L` significant bits, one quadrant digit per level. Dropping the
//! last digit yields the parent, appending one yields a child.

use crate::codec::coord::align_high;
use crate::codec::{
    axis_bounds, axis_index, axis_lower_edge, deinterleave, decode_by_geomgrid, get_code,
    interleave, scalar_from_axis_index,
};
use crate::compute::validation::{MAX_LATITUDE, MAX_LONGITUDE, validate_code};
use crate::error::{GeoSotError, Result};
use geo::{Point, Rect, coord};
use geosot_types::MAX_LEVEL;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Leading marker of the textual cell form.
pub const CELL_PREFIX: char = 'G';

/// One quadrant of the grid at a given level.
///
/// # Examples
///
/// ```
/// use geosot::GeoSotCell;
///
/// let cell = GeoSotCell::from_coords(116.397, 39.916, 20)?;
/// assert_eq!(cell.level(), 20);
///
/// let parent = cell.parent()?;
/// assert_eq!(parent.level(), 19);
/// assert!(parent.children()?.contains(&cell));
/// assert!(cell.is_descendant_of(&parent));
/// # Ok::<(), geosot::GeoSotError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct GeoSotCell {
    code: u64,
    level: u8,
}

#[derive(Deserialize)]
struct RawCell {
    code: u64,
    level: u8,
}

impl TryFrom<RawCell> for GeoSotCell {
    type Error = GeoSotError;

    fn try_from(raw: RawCell) -> Result<Self> {
        Self::new(raw.code, raw.level)
    }
}

impl GeoSotCell {
    /// Create a cell from a bit-0 aligned code.
    ///
    /// # Errors
    ///
    /// `InvalidPrecision` above level 32, `InvalidCode` when the code has
    /// more than `2 * level` significant bits.
    pub fn new(code: u64, level: u8) -> Result<Self> {
        validate_code(code, level)?;
        Ok(Self { code, level })
    }

    /// The level-0 cell covering the whole globe.
    pub const fn root() -> Self {
        Self { code: 0, level: 0 }
    }

    /// The cell at `level` containing the coordinate; its code is
    /// [`get_code`] at the same level.
    pub fn from_coords(lng: f64, lat: f64, level: u8) -> Result<Self> {
        let code = get_code(lng, lat, level)?;
        Ok(Self { code, level })
    }

    /// The cell at `level` containing a `geo::Point` (x = longitude, y = latitude).
    pub fn from_point(point: &Point, level: u8) -> Result<Self> {
        Self::from_coords(point.x(), point.y(), level)
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// The code moved to the top of the level-32 layout, low bits zeroed.
    pub fn grid_code(&self) -> u64 {
        align_high(self.code, self.level)
    }

    pub fn is_root(&self) -> bool {
        self.level == 0
    }

    /// The enclosing cell one level up.
    ///
    /// # Errors
    ///
    /// `NoParent` at level 0.
    pub fn parent(&self) -> Result<Self> {
        if self.level == 0 {
            return Err(GeoSotError::NoParent(self.level));
        }
        Ok(Self {
            code: self.code >> 2,
            level: self.level - 1,
        })
    }

    /// The enclosing cell at a shallower (or equal) `level`.
    ///
    /// # Errors
    ///
    /// `NoParent` when `level` is deeper than the cell.
    pub fn ancestor_at(&self, level: u8) -> Result<Self> {
        if level > self.level {
            return Err(GeoSotError::NoParent(self.level));
        }
        let shift = 2 * u32::from(self.level - level);
        Ok(Self {
            code: self.code.checked_shr(shift).unwrap_or(0),
            level,
        })
    }

    /// The four cells one level down, in quadrant order `00, 01, 10, 11`.
    ///
    /// # Errors
    ///
    /// `MaxDepthReached` at level 32.
    pub fn children(&self) -> Result<[Self; 4]> {
        if self.level >= MAX_LEVEL {
            return Err(GeoSotError::MaxDepthReached(self.level));
        }
        let base = self.code << 2;
        let level = self.level + 1;
        Ok([0u64, 1, 2, 3].map(|quadrant| Self {
            code: base | quadrant,
            level,
        }))
    }

    /// True when `self` strictly encloses `other`.
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        if self.level >= other.level {
            return false;
        }
        let shift = 2 * u32::from(other.level - self.level);
        other.code.checked_shr(shift).unwrap_or(0) == self.code
    }

    /// True when `ancestor` strictly encloses `self`.
    pub fn is_descendant_of(&self, ancestor: &Self) -> bool {
        ancestor.is_ancestor_of(self)
    }

    /// Signed `(longitude, latitude)` axis indices, see [`crate::codec::axis`].
    pub fn axis_indices(&self) -> (i64, i64) {
        let (lng, lat) = deinterleave(self.code);
        (axis_index(lng, self.level), axis_index(lat, self.level))
    }

    /// The cell corner nearest the origin, as decoded from the code.
    pub fn corner(&self) -> Point {
        let (lng, lat) = decode_by_geomgrid(self.grid_code());
        Point::new(lng, lat)
    }

    /// Area covered by the cell, clipped to the globe.
    pub fn extent(&self) -> Rect {
        if self.level == 0 {
            return Rect::new(
                coord! { x: -MAX_LONGITUDE, y: -MAX_LATITUDE },
                coord! { x: MAX_LONGITUDE, y: MAX_LATITUDE },
            );
        }
        let (lng_index, lat_index) = self.axis_indices();
        let (west, east) = clip(axis_bounds(lng_index, self.level), MAX_LONGITUDE);
        let (south, north) = clip(axis_bounds(lat_index, self.level), MAX_LATITUDE);
        Rect::new(coord! { x: west, y: south }, coord! { x: east, y: north })
    }

    /// Center of [`extent`](Self::extent).
    pub fn center(&self) -> Point {
        self.extent().center().into()
    }

    /// Edge neighbours at the same level in west, east, south, north order.
    ///
    /// Neighbours that would fall outside [-180, 180] x [-90, 90] are omitted;
    /// the grid does not wrap at the antimeridian.
    pub fn neighbors(&self) -> SmallVec<[Self; 4]> {
        let mut neighbors = SmallVec::new();
        if self.level == 0 {
            return neighbors;
        }
        let (lng_index, lat_index) = self.axis_indices();
        let candidates = [
            (lng_index - 1, lat_index),
            (lng_index + 1, lat_index),
            (lng_index, lat_index - 1),
            (lng_index, lat_index + 1),
        ];
        for (lng_index, lat_index) in candidates {
            if !self.index_in_range(lng_index, MAX_LONGITUDE)
                || !self.index_in_range(lat_index, MAX_LATITUDE)
            {
                continue;
            }
            let (Ok(lng), Ok(lat)) = (
                scalar_from_axis_index(lng_index, self.level),
                scalar_from_axis_index(lat_index, self.level),
            ) else {
                continue;
            };
            neighbors.push(Self {
                code: interleave(lng, lat),
                level: self.level,
            });
        }
        neighbors
    }

    /// True when both cells share an edge at the same level.
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        if self.level != other.level || self.level == 0 {
            return false;
        }
        let (lng_a, lat_a) = self.axis_indices();
        let (lng_b, lat_b) = other.axis_indices();
        let d_lng = (lng_a - lng_b).abs();
        let d_lat = (lat_a - lat_b).abs();
        d_lng + d_lat == 1
    }

    fn index_in_range(&self, index: i64, limit: f64) -> bool {
        let magnitude = if index < 0 { -(index + 1) } else { index };
        axis_lower_edge(magnitude as u64, self.level) <= limit
    }
}

fn clip((lower, upper): (f64, f64), limit: f64) -> (f64, f64) {
    (lower.clamp(-limit, limit), upper.clamp(-limit, limit))
}

impl fmt::Display for GeoSotCell {
    /// `G` followed by one quadrant digit per level; `-` after the degree
    /// (9th) and minute (15th) digits and `.` after the second (21st) digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(CELL_PREFIX)?;
        let level = u32::from(self.level);
        for written in 1..=level {
            let digit = (self.code >> (2 * (level - written))) & 0b11;
            write!(f, "{}", digit)?;
            if written < level {
                match written {
                    9 | 15 => f.write_char('-')?,
                    21 => f.write_char('.')?,
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

impl FromStr for GeoSotCell {
    type Err = GeoSotError;

    /// Parse the exact form produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GeoSotError::InvalidCellString(s.to_string());
        let digits = s.strip_prefix(CELL_PREFIX).ok_or_else(invalid)?;

        let mut code = 0u64;
        let mut level = 0u8;
        for ch in digits.chars() {
            match ch {
                '0'..='3' => {
                    if level == MAX_LEVEL {
                        return Err(invalid());
                    }
                    code = (code << 2) | u64::from(ch as u8 - b'0');
                    level += 1;
                }
                '-' | '.' => {}
                _ => return Err(invalid()),
            }
        }

        let cell = Self { code, level };
        if cell.to_string() != s {
            return Err(invalid());
        }
        Ok(cell)
    }
}
