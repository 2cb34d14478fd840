use approx::assert_abs_diff_eq;
use geosot::{
    GeoSotCell, GeoSotError, GeoSotRegion, Grid, Point, code2dec, dec2code, decode_by_geomgrid,
    get_code, spatial_analysis,
};

#[test]
fn test_known_coordinate_codes() {
    let code = get_code(116.397428, 39.90923, 32).expect("encode Beijing");
    assert_eq!(code, 526548384406042203);

    let (lng, lat) = decode_by_geomgrid(code);
    assert_abs_diff_eq!(lng, 116.397428, epsilon = 1e-6);
    assert_abs_diff_eq!(lat, 39.90923, epsilon = 1e-6);

    let code = get_code(76.233, 27.688, 32).expect("encode");
    assert_eq!(code, 339638376531246140);
}

#[test]
fn test_known_scalar_codes() {
    assert_eq!(dec2code(76.233, 32).unwrap(), 639358566);
    assert_abs_diff_eq!(
        code2dec(639358566).unwrap(),
        76.23299994574653,
        epsilon = 1e-9
    );
}

#[test]
fn test_full_depth_cell_string() {
    let cell = GeoSotCell::from_coords(76.233, 27.688, 32).unwrap();
    assert_eq!(cell.code(), 339638376531246140);
    assert_eq!(cell.to_string(), "G001023122-203103-131010.33003300330");

    let parsed: GeoSotCell = "G001023122-203103-131010.33003300330".parse().unwrap();
    assert_eq!(parsed, cell);
}

#[test]
fn test_cell_hierarchy_walk() {
    let cell = GeoSotCell::from_coords(116.397, 39.916, 20).unwrap();

    let mut current = cell;
    while !current.is_root() {
        let parent = current.parent().unwrap();
        assert!(parent.is_ancestor_of(&cell));
        assert!(parent.children().unwrap().contains(&current));
        current = parent;
    }
    assert_eq!(current, GeoSotCell::root());
    assert!(matches!(current.parent(), Err(GeoSotError::NoParent(0))));
}

#[test]
fn test_cell_extent_contains_source_point() {
    for level in [5, 9, 12, 15, 18, 21, 26, 32] {
        let cell = GeoSotCell::from_coords(116.397, 39.916, level).unwrap();
        let extent = cell.extent();
        assert!(extent.min().x <= 116.397 && 116.397 <= extent.max().x);
        assert!(extent.min().y <= 39.916 && 39.916 <= extent.max().y);
        let corner = cell.corner();
        assert_abs_diff_eq!(corner.x(), extent.min().x, epsilon = 1e-9);
        assert_abs_diff_eq!(corner.y(), extent.min().y, epsilon = 1e-9);
    }
}

#[test]
fn test_region_algebra_scenarios() {
    let region1 = GeoSotRegion::from_codes(vec![1, 2, 3, 4], 20).unwrap();
    let region2 = GeoSotRegion::from_codes(vec![3, 4, 5, 6], 20).unwrap();

    let intersection = region1.intersection(&region2).unwrap();
    assert_eq!(intersection.size(), 2);
    assert!(intersection.contains(3) && intersection.contains(4));
    assert_eq!(region1.union(&region2).unwrap().size(), 6);
    assert_eq!(region1.difference(&region2).unwrap().size(), 2);
    assert_eq!(region1.symmetric_difference(&region2).unwrap().size(), 4);

    let universe = region1.union(&region2).unwrap();
    let complement = region1.complement(&universe).unwrap();
    assert!(complement.is_disjoint(&region1).unwrap());
    assert_eq!(complement.union(&region1).unwrap(), universe);
}

#[test]
fn test_city_regions() {
    let mut beijing = GeoSotRegion::new(20).unwrap();
    for (lng, lat) in [(116.0, 39.0), (116.1, 39.0), (116.0, 39.1), (116.1, 39.1)] {
        beijing.add_point(lng, lat).unwrap();
    }
    let mut overlap = GeoSotRegion::new(20).unwrap();
    for (lng, lat) in [(116.0, 39.0), (116.2, 39.0), (116.0, 38.9)] {
        overlap.add_point(lng, lat).unwrap();
    }
    let mut shanghai = GeoSotRegion::new(20).unwrap();
    for (lng, lat) in [(121.0, 31.0), (121.1, 31.0), (121.0, 31.1)] {
        shanghai.add_point(lng, lat).unwrap();
    }

    assert_eq!(beijing.size(), 4);
    assert_eq!(beijing.intersection(&overlap).unwrap().size(), 1);
    assert_eq!(beijing.union(&overlap).unwrap().size(), 6);
    assert!(beijing.intersects(&overlap).unwrap());
    assert!(beijing.is_disjoint(&shanghai).unwrap());

    let jaccard = spatial_analysis::jaccard_similarity(&beijing, &overlap).unwrap();
    assert_abs_diff_eq!(jaccard, 1.0 / 6.0, epsilon = 1e-12);
    let ratio = spatial_analysis::overlap_ratio(&beijing, &overlap).unwrap();
    assert_abs_diff_eq!(ratio, 0.25, epsilon = 1e-12);
}

#[test]
fn test_rectangle_region_round_trips_through_strings() {
    let region = GeoSotRegion::from_rectangle(115.9, 38.9, 116.2, 39.2, 15).unwrap();
    assert!(!region.is_empty());

    let cells: Vec<GeoSotCell> = region
        .to_strings()
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(GeoSotRegion::from_cells(cells).unwrap(), region);

    let coords: Vec<Point> = region.to_coordinates();
    assert_eq!(coords.len(), region.size());
}

#[test]
fn test_coarsen_rectangle_matches_direct_cover() {
    let fine = GeoSotRegion::from_rectangle(115.9, 38.9, 116.2, 39.2, 15).unwrap();
    let coarse = GeoSotRegion::from_rectangle(115.9, 38.9, 116.2, 39.2, 12).unwrap();
    assert_eq!(fine.coarsen(12).unwrap(), coarse);
}

#[test]
fn test_grid_facade() {
    let grid = Grid::default();
    let cell = grid.cell(116.397, 39.916).unwrap();
    let mut region = grid.region().unwrap();
    region.add_cell(cell).unwrap();
    assert!(region.contains_cell(&cell));
    assert_eq!(grid.level(), 20);
}
