use maidenhead::{
    bearing_from_coordinates, bearing_from_locators, distance_between, distance_between_locators,
    grid_cell_size, Error, GridLocator, LatLon,
};

const NAIROBI: (f64, f64) = (-1.286389, 36.817222);
const SEATTLE: (f64, f64) = (47.609722, -122.333056);

fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn distance_in_all_three_units() {
    let distance = distance_between(NAIROBI.0, NAIROBI.1, SEATTLE.0, SEATTLE.1).unwrap();

    assert_close(distance.kilometers(), 14485.925805, 1e-5);
    assert_close(distance.statute_miles(), 9001.119675, 1e-5);
    assert_close(distance.nautical_miles(), 7816.752375, 1e-5);
}

#[test]
fn distance_is_symmetric() {
    let points = [NAIROBI, SEATTLE, (0.0, 0.0), (-33.8688, 151.2093), (64.1466, -21.9426)];

    for a in points {
        for b in points {
            let there = distance_between(a.0, a.1, b.0, b.1).unwrap();
            let back = distance_between(b.0, b.1, a.0, a.1).unwrap();
            assert_close(there.kilometers(), back.kilometers(), 1e-9);
        }
    }
}

#[test]
fn distance_to_self_is_zero() {
    for (lat, lon) in [NAIROBI, SEATTLE, (10.0, 20.0), (89.9, -179.9)] {
        let distance = distance_between(lat, lon, lat, lon).unwrap();

        assert_eq!(distance.kilometers(), 0.0);
        assert_eq!(distance.statute_miles(), 0.0);
        assert_eq!(distance.nautical_miles(), 0.0);
    }
}

#[test]
fn distance_of_near_antipodal_points_is_finite() {
    let distance = distance_between(0.0, 0.0, 0.0, 179.9999999).unwrap();

    assert!(distance.kilometers().is_finite());
    assert_close(distance.kilometers(), 20015.15, 1e-2);
}

#[test]
fn distance_rejects_either_point_out_of_range() {
    let cases = [
        (90.0, 0.0, 0.0, 0.0, "Start point"),
        (0.0, 180.0, 0.0, 0.0, "Start point"),
        (0.0, 0.0, -90.0, 0.0, "End point"),
        (0.0, 0.0, 0.0, -180.0, "End point"),
    ];

    for (lat1, lon1, lat2, lon2, label) in cases {
        match distance_between(lat1, lon1, lat2, lon2) {
            Err(Error::InvalidCoord(msg)) => assert!(msg.starts_with(label), "{msg}"),
            other => panic!("unexpected result {other:?}"),
        }
    }
}

#[test]
fn distance_between_locator_centers() {
    let distance = distance_between_locators("KI88jr", "CN87uo").unwrap();
    assert_close(distance.kilometers(), 14482.486600, 1e-5);
    assert_close(distance.statute_miles(), 8998.982656, 1e-5);
    assert_close(distance.nautical_miles(), 7814.896545, 1e-5);

    assert_eq!(distance_between_locators("JJ00", "JJ00").unwrap().kilometers(), 0.0);
    assert!(matches!(distance_between_locators("KI88jr", "cn87uo"), Err(Error::InvalidLocator(_))));
    assert!(matches!(distance_between_locators("KI88j", "CN87uo"), Err(Error::InvalidLocator(_))));
}

#[test]
fn bearing_between_cities() {
    assert_eq!(bearing_from_coordinates(NAIROBI.0, NAIROBI.1, SEATTLE.0, SEATTLE.1).unwrap(), 342.0);
    // Not simply the reverse bearing plus 180
    assert_eq!(bearing_from_coordinates(SEATTLE.0, SEATTLE.1, NAIROBI.0, NAIROBI.1).unwrap(), 28.0);
}

#[test]
fn bearing_along_the_axes() {
    assert_eq!(bearing_from_coordinates(0.0, 0.0, 10.0, 0.0).unwrap(), 0.0);
    assert_eq!(bearing_from_coordinates(0.0, 0.0, 0.0, 10.0).unwrap(), 90.0);
    assert_eq!(bearing_from_coordinates(0.0, 0.0, -10.0, 0.0).unwrap(), 180.0);
    assert_eq!(bearing_from_coordinates(0.0, 0.0, 0.0, -10.0).unwrap(), 270.0);
}

#[test]
fn bearing_across_the_antimeridian() {
    assert_eq!(bearing_from_coordinates(0.0, 0.0, 0.0, 179.5).unwrap(), 90.0);
    assert_eq!(bearing_from_coordinates(0.0, 0.0, 0.0, -179.5).unwrap(), 270.0);
    assert_eq!(bearing_from_coordinates(10.0, 170.0, 10.0, -170.0).unwrap(), 88.0);
}

#[test]
fn bearing_is_whole_degrees_in_range() {
    let points = [NAIROBI, SEATTLE, (0.0, 0.0), (-33.8688, 151.2093), (64.1466, -21.9426)];

    for a in points {
        for b in points {
            let bearing = bearing_from_coordinates(a.0, a.1, b.0, b.1).unwrap();
            assert!((0.0..360.0).contains(&bearing), "{bearing}");
            assert_eq!(bearing.fract(), 0.0);
        }
    }
}

#[test]
fn bearing_to_self_is_zero() {
    assert_eq!(bearing_from_coordinates(10.0, 10.0, 10.0, 10.0).unwrap(), 0.0);
}

#[test]
fn bearing_rejects_out_of_range_points() {
    assert!(matches!(bearing_from_coordinates(91.0, 0.0, 0.0, 0.0), Err(Error::InvalidCoord(_))));
    assert!(matches!(bearing_from_coordinates(0.0, 0.0, 0.0, 181.0), Err(Error::InvalidCoord(_))));
}

#[test]
fn bearing_between_locators() {
    assert_eq!(bearing_from_locators("KI88jr", "CN87uo").unwrap(), 342.0);
    assert_eq!(bearing_from_locators("CN87uo", "KI88jr").unwrap(), 28.0);
    assert!(matches!(bearing_from_locators("KI88jr", "CN8"), Err(Error::InvalidLocator(_))));
}

#[test]
fn size_of_a_subsquare() {
    let size = grid_cell_size("KI88jr").unwrap();

    assert_close(size.north().kilometers(), 9.264069, 1e-5);
    assert_close(size.south().kilometers(), 9.263920, 1e-5);
    assert_close(size.east_west().kilometers(), 4.633137, 1e-5);
    assert_close(size.north().statute_miles(), 5.756415, 1e-5);
    assert_close(size.east_west().statute_miles(), 2.878892, 1e-5);
    assert_close(size.area().square_kilometers(), 42.921358, 1e-4);
    assert_close(size.area().square_miles(), 16.571965, 1e-4);
    assert_close(size.perimeter().kilometers(), 27.794264, 1e-4);
}

#[test]
fn size_of_a_square() {
    let size = grid_cell_size("CN87").unwrap();

    assert_close(size.north().kilometers(), 148.804175, 1e-5);
    assert_close(size.south().kilometers(), 151.665896, 1e-5);
    assert_close(size.east_west().kilometers(), 111.195293, 1e-5);
    assert_close(size.area().square_kilometers(), 16705.428852, 1e-3);
    assert_close(size.area().square_miles(), 6449.977327, 1e-3);
    assert_close(size.perimeter().kilometers(), 522.860658, 1e-4);
    assert_close(size.perimeter().statute_miles(), 324.889926, 1e-4);
}

#[test]
fn size_perimeter_adds_up() {
    let size = GridLocator::parse_str("FN31pr").unwrap().size();
    let expected = size.north().kilometers() + size.south().kilometers() + 2.0 * size.east_west().kilometers();

    assert_close(size.perimeter().kilometers(), expected, 1e-9);
}

#[test]
fn size_of_cells_touching_the_poles() {
    // The northern edge of RR is the pole itself
    let size = grid_cell_size("RR").unwrap();
    assert_close(size.north().kilometers(), 0.0, 1e-6);
    assert_close(size.south().kilometers(), 384.277828, 1e-5);
    assert_close(size.east_west().kilometers(), 1111.952932, 1e-5);
    assert_close(size.area().square_kilometers(), 213649.428826, 1e-2);

    let size = grid_cell_size("AA").unwrap();
    assert_close(size.south().kilometers(), 0.0, 1e-6);
    assert!(size.area().square_kilometers() > 0.0);
}

#[test]
fn area_is_never_negative() {
    for locator in ["AA", "JJ", "RR", "AR", "RA", "KI88", "KI88jr", "KI88jr81", "KI88jr81BG", "RR99xx99XX"] {
        let area = grid_cell_size(locator).unwrap().area();
        assert!(area.square_kilometers() >= 0.0, "{locator}");
        assert!(area.square_miles() >= 0.0, "{locator}");
    }
}

#[test]
fn finer_cells_are_smaller() {
    let sizes: Vec<f64> = ["KI", "KI88", "KI88jr", "KI88jr81", "KI88jr81BG"]
        .into_iter()
        .map(|locator| grid_cell_size(locator).unwrap().area().square_kilometers())
        .collect();

    assert!(sizes.windows(2).all(|pair| pair[0] > pair[1]), "{sizes:?}");
}

#[test]
fn size_rejects_invalid_locator() {
    assert!(matches!(grid_cell_size("KI88jR"), Err(Error::InvalidLocator(_))));
}

#[test]
fn latlon_methods_match_free_functions() {
    let start = LatLon::create(NAIROBI.0, NAIROBI.1).unwrap();
    let end = LatLon::create(SEATTLE.0, SEATTLE.1).unwrap();

    let distance = distance_between(NAIROBI.0, NAIROBI.1, SEATTLE.0, SEATTLE.1).unwrap();
    assert_eq!(start.distance_to(&end), distance);
    assert_eq!(start.bearing_to(&end), 342.0);
}
