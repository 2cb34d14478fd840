//! Region Algebra Example
//!
//! Builds city regions at level 20 and walks through set operations,
//! relationship checks and analysis metrics.

use geo::polygon;
use geosot::{GeoSotRegion, Polygon, spatial_analysis};
use std::error::Error;

fn region_from_points(points: &[(f64, f64)], level: u8) -> Result<GeoSotRegion, Box<dyn Error>> {
    let mut region = GeoSotRegion::new(level)?;
    for &(lng, lat) in points {
        region.add_point(lng, lat)?;
    }
    Ok(region)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== GeoSOT - Region Algebra ===\n");

    let level = 20;

    let beijing = region_from_points(
        &[(116.0, 39.0), (116.1, 39.0), (116.0, 39.1), (116.1, 39.1)],
        level,
    )?;
    let overlap = region_from_points(&[(116.0, 39.0), (116.2, 39.0), (116.0, 38.9)], level)?;
    let shanghai = region_from_points(&[(121.0, 31.0), (121.1, 31.0), (121.0, 31.1)], level)?;

    println!("1. Regions");
    println!("----------");
    println!("   Beijing:  {} cells", beijing.size());
    println!("   Overlap:  {} cells", overlap.size());
    println!("   Shanghai: {} cells\n", shanghai.size());

    println!("2. Set operations");
    println!("-----------------");
    let intersection = beijing.intersection(&overlap)?;
    println!("   Beijing ∩ Overlap = {} cells {:?}", intersection.size(), intersection.codes());
    println!("   Beijing ∪ Overlap = {} cells", beijing.union(&overlap)?.size());
    println!("   Beijing - Overlap = {} cells", beijing.difference(&overlap)?.size());
    println!("   Overlap - Beijing = {} cells", overlap.difference(&beijing)?.size());
    println!(
        "   Beijing ⊕ Overlap = {} cells",
        beijing.symmetric_difference(&overlap)?.size()
    );

    let universe = beijing.union(&overlap)?.union(&shanghai)?;
    println!(
        "   Complement of Beijing in all = {} cells\n",
        beijing.complement(&universe)?.size()
    );

    println!("3. Relationships");
    println!("----------------");
    println!("   Beijing intersects Overlap: {}", beijing.intersects(&overlap)?);
    println!("   Beijing intersects Shanghai: {}", beijing.intersects(&shanghai)?);
    println!("   Beijing disjoint Shanghai: {}", beijing.is_disjoint(&shanghai)?);

    let small = GeoSotRegion::from_codes(beijing.codes().iter().take(2).copied(), level)?;
    println!("   Small is subset of Beijing: {}", small.is_subset(&beijing)?);
    println!("   Beijing is superset of Small: {}\n", beijing.is_superset(&small)?);

    println!("4. Metrics");
    println!("----------");
    println!(
        "   Jaccard(Beijing, Overlap): {:.4}",
        spatial_analysis::jaccard_similarity(&beijing, &overlap)?
    );
    println!(
        "   Overlap ratio: {:.4}",
        spatial_analysis::overlap_ratio(&beijing, &overlap)?
    );
    println!(
        "   Compactness of Beijing: {:.4}\n",
        spatial_analysis::compactness(&beijing)
    );

    println!("5. Covers");
    println!("---------");
    let rect = GeoSotRegion::from_rectangle(115.9, 38.9, 116.2, 39.2, 18)?;
    println!("   Rectangle (115.9, 38.9)-(116.2, 39.2): {} cells", rect.size());
    for (i, cell) in rect.to_strings().iter().take(5).enumerate() {
        println!("     {}: {}", i + 1, cell);
    }

    let square: Polygon = geo::polygon![
        (x: 116.0, y: 39.0),
        (x: 116.2, y: 39.0),
        (x: 116.2, y: 39.2),
        (x: 116.0, y: 39.2),
        (x: 116.0, y: 39.0),
    ];
    let polygon = GeoSotRegion::from_polygon(&square, 18)?;
    println!("   Polygon: {} cells", polygon.size());
    println!(
        "   Compactness of polygon cover: {:.4}\n",
        spatial_analysis::compactness(&polygon)
    );

    println!("6. Coordinates");
    println!("--------------");
    for (i, point) in small.to_coordinates().iter().enumerate() {
        println!("   Cell {}: ({:.6}, {:.6})", i + 1, point.x(), point.y());
    }

    Ok(())
}
