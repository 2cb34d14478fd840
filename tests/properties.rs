use geosot::{
    GeoSotCell, GeoSotRegion, code2dec_at, dec2code, decode_at, decode_by_geomgrid, get_code,
    spatial_analysis,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn resolution(precision: u8) -> f64 {
    1.0 / (3600.0 * 2f64.powi(i32::from(precision) - 21))
}

proptest! {
    #[test]
    fn coarser_codes_are_prefixes(lng in -180.0f64..=180.0, lat in -90.0f64..=90.0, level in 1u8..=32) {
        let full = get_code(lng, lat, 32).unwrap();
        let coarse = get_code(lng, lat, level).unwrap();
        prop_assert_eq!(coarse, full >> (2 * (32 - u32::from(level))));
        prop_assert_eq!(coarse >> (2 * u32::from(level)), 0);
    }

    #[test]
    fn scalar_round_trip_within_resolution(value in -180.0f64..=180.0, precision in 21u8..=32) {
        let code = dec2code(value, precision).unwrap();
        prop_assert_eq!(code >> precision, 0);
        let back = code2dec_at(code, precision).unwrap();
        prop_assert!(
            (back - value).abs() <= resolution(precision),
            "precision {} value {} decoded {}", precision, value, back
        );
    }

    #[test]
    fn coordinate_round_trip_within_resolution(lng in -180.0f64..=180.0, lat in -90.0f64..=90.0, precision in 21u8..=32) {
        let (x, y) = decode_at(get_code(lng, lat, precision).unwrap(), precision).unwrap();
        prop_assert!((x - lng).abs() <= resolution(precision), "lng {} decoded as {}", lng, x);
        prop_assert!((y - lat).abs() <= resolution(precision), "lat {} decoded as {}", lat, y);
    }

    #[test]
    fn full_depth_decode_is_close(lng in -180.0f64..=180.0, lat in -90.0f64..=90.0) {
        let (x, y) = decode_by_geomgrid(get_code(lng, lat, 32).unwrap());
        prop_assert!((x - lng).abs() < 1e-6, "lng {} decoded as {}", lng, x);
        prop_assert!((y - lat).abs() < 1e-6, "lat {} decoded as {}", lat, y);
    }

    #[test]
    fn cell_extent_contains_point(lng in -179.0f64..179.0, lat in -89.0f64..89.0, level in 1u8..=32) {
        let extent = GeoSotCell::from_coords(lng, lat, level).unwrap().extent();
        let eps = 1e-6;
        prop_assert!(extent.min().x - eps <= lng && lng <= extent.max().x + eps);
        prop_assert!(extent.min().y - eps <= lat && lat <= extent.max().y + eps);
    }

    #[test]
    fn children_point_back_to_parent(lng in -180.0f64..=180.0, lat in -90.0f64..=90.0, level in 0u8..32) {
        let cell = if level == 0 {
            GeoSotCell::root()
        } else {
            GeoSotCell::from_coords(lng, lat, level).unwrap()
        };
        for child in cell.children().unwrap() {
            prop_assert_eq!(child.parent().unwrap(), cell);
            prop_assert!(cell.is_ancestor_of(&child));
            prop_assert!(!child.is_ancestor_of(&cell));
        }
    }

    #[test]
    fn deeper_cells_descend_from_shallower(lng in -180.0f64..=180.0, lat in -90.0f64..=90.0, a in 1u8..=32, b in 1u8..=32) {
        let (shallow, deep) = if a <= b { (a, b) } else { (b, a) };
        let coarse = GeoSotCell::from_coords(lng, lat, shallow).unwrap();
        let fine = GeoSotCell::from_coords(lng, lat, deep).unwrap();
        prop_assert_eq!(fine.ancestor_at(shallow).unwrap(), coarse);
        prop_assert!(fine.is_descendant_of(&coarse) || fine == coarse);
    }

    #[test]
    fn cell_strings_round_trip(lng in -180.0f64..=180.0, lat in -90.0f64..=90.0, level in 1u8..=32) {
        let cell = GeoSotCell::from_coords(lng, lat, level).unwrap();
        let parsed: GeoSotCell = cell.to_string().parse().unwrap();
        prop_assert_eq!(parsed, cell);
    }

    #[test]
    fn neighbors_are_adjacent(lng in -179.0f64..179.0, lat in -89.0f64..89.0, level in 9u8..=32) {
        let cell = GeoSotCell::from_coords(lng, lat, level).unwrap();
        let neighbors = cell.neighbors();
        prop_assert_eq!(neighbors.len(), 4);
        for neighbor in neighbors {
            prop_assert!(cell.is_adjacent_to(&neighbor));
            prop_assert!(neighbor.is_adjacent_to(&cell));
        }
    }

    #[test]
    fn region_sizes_obey_inclusion_exclusion(
        a in proptest::collection::btree_set(0u64..64, 0..20),
        b in proptest::collection::btree_set(0u64..64, 0..20),
    ) {
        let r1 = GeoSotRegion::from_codes(a.iter().copied(), 3).unwrap();
        let r2 = GeoSotRegion::from_codes(b.iter().copied(), 3).unwrap();

        let union = r1.union(&r2).unwrap();
        let intersection = r1.intersection(&r2).unwrap();
        prop_assert_eq!(union.size() + intersection.size(), r1.size() + r2.size());

        let expected: BTreeSet<u64> = a.symmetric_difference(&b).copied().collect();
        let sym_diff = r1.symmetric_difference(&r2).unwrap();
        prop_assert_eq!(sym_diff.codes(), &expected);

        prop_assert!(intersection.is_subset(&r1).unwrap());
        prop_assert!(union.is_superset(&r2).unwrap());

        let jaccard = spatial_analysis::jaccard_similarity(&r1, &r2).unwrap();
        prop_assert!((0.0..=1.0).contains(&jaccard));

        let compactness = spatial_analysis::compactness(&union);
        prop_assert!((0.0..=1.0).contains(&compactness));
    }
}
