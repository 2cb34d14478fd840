//! Stateless metrics over regions.

use crate::error::{GeoSotError, Result};
use crate::region::GeoSotRegion;

fn check_level(region1: &GeoSotRegion, region2: &GeoSotRegion) -> Result<()> {
    if region1.level() != region2.level() {
        return Err(GeoSotError::LevelMismatch {
            left: region1.level(),
            right: region2.level(),
        });
    }
    Ok(())
}

/// Intersection size divided by union size.
///
/// Two empty regions have a similarity of `0.0`.
///
/// # Examples
///
/// ```
/// use geosot::{GeoSotRegion, spatial_analysis};
///
/// let a = GeoSotRegion::from_codes([1, 2, 3], 20)?;
/// let b = GeoSotRegion::from_codes([2, 3, 4], 20)?;
/// assert_eq!(spatial_analysis::jaccard_similarity(&a, &b)?, 0.5);
/// # Ok::<(), geosot::GeoSotError>(())
/// ```
pub fn jaccard_similarity(region1: &GeoSotRegion, region2: &GeoSotRegion) -> Result<f64> {
    check_level(region1, region2)?;

    let shared = region1.codes().intersection(region2.codes()).count();
    let total = region1.size() + region2.size() - shared;
    if total == 0 {
        return Ok(0.0);
    }
    Ok(shared as f64 / total as f64)
}

/// Share of `region1` covered by `region2`; `0.0` when `region1` is empty.
pub fn overlap_ratio(region1: &GeoSotRegion, region2: &GeoSotRegion) -> Result<f64> {
    check_level(region1, region2)?;

    if region1.is_empty() {
        return Ok(0.0);
    }
    let shared = region1.codes().intersection(region2.codes()).count();
    Ok(shared as f64 / region1.size() as f64)
}

/// Edge-adjacent cell pairs divided by all cell pairs.
///
/// Regions of zero or one cell are perfectly compact.
pub fn compactness(region: &GeoSotRegion) -> f64 {
    let n = region.size();
    if n <= 1 {
        return 1.0;
    }

    // Each adjacent pair is seen once from either side.
    let seen: usize = region
        .cells()
        .map(|cell| {
            cell.neighbors()
                .iter()
                .filter(|neighbor| region.contains(neighbor.code()))
                .count()
        })
        .sum();

    let pairs = n * (n - 1) / 2;
    (seen / 2) as f64 / pairs as f64
}
