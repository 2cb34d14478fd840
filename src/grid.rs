//! Configured entry point for building cells and regions.

use crate::cell::GeoSotCell;
use crate::config::Config;
use crate::error::Result;
use crate::region::GeoSotRegion;
use geo::Polygon;

/// A grid bound to a default level and region cell cap.
///
/// # Examples
///
/// ```
/// use geosot::{Config, Grid, Level};
///
/// let grid = Grid::new(Config::default().with_default_level(Level::new(18).unwrap()))?;
/// let cell = grid.cell(116.397, 39.916)?;
/// assert_eq!(cell.level(), 18);
///
/// let mut region = grid.region()?;
/// region.add_cell(cell)?;
/// assert!(region.contains_point(116.397, 39.916)?);
/// # Ok::<(), geosot::GeoSotError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Grid {
    config: Config,
}

impl Grid {
    /// Create a grid after validating `config`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Created grid at level {} with region cap {}",
            config.default_level,
            config.max_region_cells
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured default level.
    pub fn level(&self) -> u8 {
        self.config.default_level.get()
    }

    /// The cell containing a coordinate at the default level.
    pub fn cell(&self, lng: f64, lat: f64) -> Result<GeoSotCell> {
        GeoSotCell::from_coords(lng, lat, self.level())
    }

    /// An empty region at the default level.
    pub fn region(&self) -> Result<GeoSotRegion> {
        GeoSotRegion::new(self.level())
    }

    pub fn region_from_codes<I>(&self, codes: I) -> Result<GeoSotRegion>
    where
        I: IntoIterator<Item = u64>,
    {
        GeoSotRegion::from_codes(codes, self.level())
    }

    /// Cover a rectangle at the default level within the configured cap.
    pub fn rectangle(
        &self,
        min_lng: f64,
        min_lat: f64,
        max_lng: f64,
        max_lat: f64,
    ) -> Result<GeoSotRegion> {
        GeoSotRegion::from_rectangle_with_limit(
            min_lng,
            min_lat,
            max_lng,
            max_lat,
            self.level(),
            self.config.max_region_cells,
        )
    }

    /// Cover a polygon at the default level within the configured cap.
    pub fn polygon(&self, polygon: &Polygon) -> Result<GeoSotRegion> {
        GeoSotRegion::from_polygon_with_limit(
            polygon,
            self.level(),
            self.config.max_region_cells,
        )
    }
}
