//! Grid configuration.
//!
//! Re-exports the level types from the `geosot-types` crate for convenience.
use crate::error::{GeoSotError, Result};
use serde::de::Error;

pub use geosot_types::level::{Level, LevelBand, cell_size_degrees};

/// Cell cap applied to rectangle and polygon covers when none is configured.
pub const DEFAULT_MAX_REGION_CELLS: usize = 1_000_000;

/// Grid configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Level used for cells and regions built without an explicit level
    #[serde(default = "Config::default_level")]
    pub default_level: Level,

    /// Largest number of cells a rectangle or polygon cover may produce
    #[serde(default = "Config::default_max_region_cells")]
    pub max_region_cells: usize,
}

impl Config {
    const fn default_level() -> Level {
        match Level::new(20) {
            Some(level) => level,
            None => Level::MAX,
        }
    }

    const fn default_max_region_cells() -> usize {
        DEFAULT_MAX_REGION_CELLS
    }

    pub fn with_default_level(mut self, level: Level) -> Self {
        assert!(level != Level::ROOT, "Default level must be at least 1");
        self.default_level = level;
        self
    }

    pub fn with_max_region_cells(mut self, max_cells: usize) -> Self {
        assert!(max_cells > 0, "Region cell limit must be greater than zero");

        if max_cells > 10_000_000 {
            log::warn!(
                "Region cell limit of {} is very large and may consume significant memory. \
                Each cell stores one 64-bit code.",
                max_cells
            );
        }

        self.max_region_cells = max_cells;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_level == Level::ROOT {
            return Err(GeoSotError::InvalidConfig(
                "Default level must be at least 1".to_string(),
            ));
        }

        if self.max_region_cells == 0 {
            return Err(GeoSotError::InvalidConfig(
                "Region cell limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_level: Self::default_level(),
            max_region_cells: Self::default_max_region_cells(),
        }
    }
}
