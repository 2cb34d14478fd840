//! Regions: sets of same-level cell codes with set algebra.
//!
//! Every combining operation checks that both operands share a level and
//! fails with [`GeoSotError::LevelMismatch`] otherwise. Combinations return new
//! regions; operands are never modified.

use crate::cell::GeoSotCell;
use crate::compute::cover::{polygon_codes, rectangle_codes};
use crate::compute::validation::{validate_code, validate_points, validate_precision};
use crate::config::DEFAULT_MAX_REGION_CELLS;
use crate::error::{GeoSotError, Result};
use geo::{Point, Polygon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered set of cell codes sharing one level.
///
/// # Examples
///
/// ```
/// use geosot::GeoSotRegion;
///
/// let a = GeoSotRegion::from_codes([1, 2, 3, 4], 20)?;
/// let b = GeoSotRegion::from_codes([3, 4, 5, 6], 20)?;
///
/// let both = a.intersection(&b)?;
/// assert_eq!(both.size(), 2);
/// assert!(both.contains(3) && both.contains(4));
/// assert_eq!(a.union(&b)?.size(), 6);
/// # Ok::<(), geosot::GeoSotError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRegion")]
pub struct GeoSotRegion {
    level: u8,
    codes: BTreeSet<u64>,
}

#[derive(Deserialize)]
struct RawRegion {
    level: u8,
    codes: Vec<u64>,
}

impl TryFrom<RawRegion> for GeoSotRegion {
    type Error = GeoSotError;

    fn try_from(raw: RawRegion) -> Result<Self> {
        Self::from_codes(raw.codes, raw.level)
    }
}

impl GeoSotRegion {
    /// Create an empty region at `level` in `[1, 32]`.
    pub fn new(level: u8) -> Result<Self> {
        validate_precision(level)?;
        Ok(Self {
            level,
            codes: BTreeSet::new(),
        })
    }

    /// Build a region from raw codes; duplicates collapse.
    ///
    /// # Errors
    ///
    /// `InvalidCode` when a code does not fit `level`.
    pub fn from_codes<I>(codes: I, level: u8) -> Result<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut region = Self::new(level)?;
        for code in codes {
            region.add_code(code)?;
        }
        Ok(region)
    }

    /// Build a region from the cells containing each point.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinate` naming the index of the first point off the globe.
    pub fn from_points(points: &[Point], level: u8) -> Result<Self> {
        validate_points(points)?;
        let mut region = Self::new(level)?;
        for point in points {
            region.codes.insert(GeoSotCell::from_point(point, level)?.code());
        }
        Ok(region)
    }

    /// Build a region from cells that must all share one level.
    ///
    /// # Errors
    ///
    /// `InvalidPrecision` when empty or at level 0, `LevelMismatch` on mixed levels.
    pub fn from_cells<I>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = GeoSotCell>,
    {
        let mut cells = cells.into_iter().peekable();
        let level = cells.peek().map_or(0, GeoSotCell::level);
        let mut region = Self::new(level)?;
        for cell in cells {
            region.add_cell(cell)?;
        }
        Ok(region)
    }

    /// Cover a closed rectangle, capped at the default cell limit.
    pub fn from_rectangle(
        min_lng: f64,
        min_lat: f64,
        max_lng: f64,
        max_lat: f64,
        level: u8,
    ) -> Result<Self> {
        Self::from_rectangle_with_limit(
            min_lng,
            min_lat,
            max_lng,
            max_lat,
            level,
            DEFAULT_MAX_REGION_CELLS,
        )
    }

    /// Cover a closed rectangle with every cell at `level` that touches it.
    ///
    /// # Errors
    ///
    /// `TooManyCells` when the cover exceeds `max_cells`.
    pub fn from_rectangle_with_limit(
        min_lng: f64,
        min_lat: f64,
        max_lng: f64,
        max_lat: f64,
        level: u8,
        max_cells: usize,
    ) -> Result<Self> {
        let codes = rectangle_codes(min_lng, min_lat, max_lng, max_lat, level, max_cells)?;
        Ok(Self { level, codes })
    }

    /// Cover a polygon, capped at the default cell limit.
    pub fn from_polygon(polygon: &Polygon, level: u8) -> Result<Self> {
        Self::from_polygon_with_limit(polygon, level, DEFAULT_MAX_REGION_CELLS)
    }

    /// Cover a polygon with every cell at `level` whose extent intersects it.
    pub fn from_polygon_with_limit(
        polygon: &Polygon,
        level: u8,
        max_cells: usize,
    ) -> Result<Self> {
        let codes = polygon_codes(polygon, level, max_cells)?;
        Ok(Self { level, codes })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Read-only view of the member codes.
    pub fn codes(&self) -> &BTreeSet<u64> {
        &self.codes
    }

    /// Member cells in code order.
    pub fn cells(&self) -> impl Iterator<Item = GeoSotCell> + '_ {
        self.codes
            .iter()
            .filter_map(move |&code| GeoSotCell::new(code, self.level).ok())
    }

    pub fn size(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Insert a raw code.
    pub fn add_code(&mut self, code: u64) -> Result<()> {
        validate_code(code, self.level)?;
        self.codes.insert(code);
        Ok(())
    }

    /// Insert a cell of the region's level.
    pub fn add_cell(&mut self, cell: GeoSotCell) -> Result<()> {
        if cell.level() != self.level {
            return Err(GeoSotError::LevelMismatch {
                left: self.level,
                right: cell.level(),
            });
        }
        self.codes.insert(cell.code());
        Ok(())
    }

    /// Insert the cell containing the coordinate. Idempotent.
    pub fn add_point(&mut self, lng: f64, lat: f64) -> Result<()> {
        let cell = GeoSotCell::from_coords(lng, lat, self.level)?;
        self.codes.insert(cell.code());
        Ok(())
    }

    pub fn contains(&self, code: u64) -> bool {
        self.codes.contains(&code)
    }

    pub fn contains_cell(&self, cell: &GeoSotCell) -> bool {
        cell.level() == self.level && self.contains(cell.code())
    }

    /// True when the cell containing the coordinate is a member.
    pub fn contains_point(&self, lng: f64, lat: f64) -> Result<bool> {
        let cell = GeoSotCell::from_coords(lng, lat, self.level)?;
        Ok(self.contains(cell.code()))
    }

    /// Codes present in both regions.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.intersection(b).copied().collect())
    }

    /// Codes present in either region.
    pub fn union(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.union(b).copied().collect())
    }

    /// Codes of `self` not in `other`.
    pub fn difference(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.difference(b).copied().collect())
    }

    /// Codes in exactly one of the regions.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.symmetric_difference(b).copied().collect())
    }

    /// Codes of `universe` not in `self`.
    pub fn complement(&self, universe: &Self) -> Result<Self> {
        universe.difference(self)
    }

    pub fn is_subset(&self, other: &Self) -> Result<bool> {
        self.check_level(other)?;
        Ok(self.codes.is_subset(&other.codes))
    }

    pub fn is_superset(&self, other: &Self) -> Result<bool> {
        self.check_level(other)?;
        Ok(self.codes.is_superset(&other.codes))
    }

    /// True when the regions share at least one code.
    pub fn intersects(&self, other: &Self) -> Result<bool> {
        self.check_level(other)?;
        Ok(!self.codes.is_disjoint(&other.codes))
    }

    pub fn is_disjoint(&self, other: &Self) -> Result<bool> {
        self.check_level(other)?;
        Ok(self.codes.is_disjoint(&other.codes))
    }

    /// The region of ancestors at a shallower `level`.
    ///
    /// # Errors
    ///
    /// `InvalidPrecision` unless `1 <= level <= self.level()`.
    pub fn coarsen(&self, level: u8) -> Result<Self> {
        if level == 0 || level > self.level {
            return Err(GeoSotError::InvalidPrecision {
                precision: level,
                min: 1,
                max: self.level,
            });
        }
        let shift = 2 * u32::from(self.level - level);
        Ok(Self {
            level,
            codes: self.codes.iter().map(|code| code >> shift).collect(),
        })
    }

    /// Textual form of every member cell, in code order.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells().map(|cell| cell.to_string()).collect()
    }

    /// Corner coordinate of every member cell, in code order.
    pub fn to_coordinates(&self) -> Vec<Point> {
        self.cells().map(|cell| cell.corner()).collect()
    }

    fn check_level(&self, other: &Self) -> Result<()> {
        if self.level != other.level {
            return Err(GeoSotError::LevelMismatch {
                left: self.level,
                right: other.level,
            });
        }
        Ok(())
    }

    fn combine<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: FnOnce(&BTreeSet<u64>, &BTreeSet<u64>) -> BTreeSet<u64>,
    {
        self.check_level(other)?;
        Ok(Self {
            level: self.level,
            codes: op(&self.codes, &other.codes),
        })
    }
}
