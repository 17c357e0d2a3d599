use maidenhead::tables::{boundary, boundary_degrees, Axis, Tier};

#[test]
fn alphabets_have_expected_sizes() {
    assert_eq!(Tier::Field.alphabet().len(), 18);
    assert_eq!(Tier::Square.alphabet().len(), 10);
    assert_eq!(Tier::Subsquare.alphabet().len(), 24);
    assert_eq!(Tier::Extended.alphabet().len(), 10);
    assert_eq!(Tier::SuperExtended.alphabet().len(), 24);
}

#[test]
fn every_alphabet_symbol_has_a_boundary_on_both_axes() {
    for tier in Tier::ALL {
        for axis in [Axis::Longitude, Axis::Latitude] {
            let cell = tier.cell_size(axis);
            for (idx, ch) in tier.alphabet().chars().enumerate() {
                let offset = boundary_degrees(tier, axis, ch)
                    .unwrap_or_else(|| panic!("{ch} missing from {tier:?} {axis:?}"));
                #[allow(clippy::cast_precision_loss)]
                let expected = match tier {
                    Tier::Field => idx as f64 * cell - if axis == Axis::Longitude { 180.0 } else { 90.0 },
                    _ => idx as f64 * cell,
                };
                assert!((offset - expected).abs() < 1e-12, "{tier:?} {axis:?} {ch}");
            }
        }
    }
}

#[test]
fn longitude_subsquare_includes_v() {
    assert_eq!(boundary(Tier::Subsquare, Axis::Longitude, 'u'), Some(100.0));
    assert_eq!(boundary(Tier::Subsquare, Axis::Longitude, 'v'), Some(105.0));
    assert_eq!(boundary(Tier::Subsquare, Axis::Longitude, 'w'), Some(110.0));
}

#[test]
fn field_boundaries_span_the_globe() {
    assert_eq!(boundary(Tier::Field, Axis::Longitude, 'A'), Some(-180.0));
    assert_eq!(boundary(Tier::Field, Axis::Longitude, 'R'), Some(160.0));
    assert_eq!(boundary(Tier::Field, Axis::Latitude, 'A'), Some(-90.0));
    assert_eq!(boundary(Tier::Field, Axis::Latitude, 'R'), Some(80.0));
}

#[test]
fn boundaries_use_natural_units() {
    assert_eq!(boundary(Tier::Subsquare, Axis::Latitude, 'x'), Some(57.5));
    assert_eq!(boundary(Tier::Extended, Axis::Longitude, '9'), Some(270.0));
    assert_eq!(boundary(Tier::SuperExtended, Axis::Latitude, 'X'), Some(14.375));
    assert_eq!(boundary_degrees(Tier::Extended, Axis::Longitude, '9'), Some(270.0 / 3600.0));
}

#[test]
fn unknown_characters_have_no_boundary() {
    assert_eq!(boundary(Tier::Field, Axis::Longitude, 'S'), None);
    assert_eq!(boundary(Tier::Field, Axis::Latitude, 'a'), None);
    assert_eq!(boundary(Tier::Square, Axis::Longitude, 'A'), None);
    assert_eq!(boundary(Tier::Subsquare, Axis::Latitude, 'y'), None);
    assert_eq!(boundary(Tier::SuperExtended, Axis::Longitude, 'x'), None);
}

#[test]
fn tiers_follow_pair_order() {
    assert_eq!(Tier::from_pair(0), Some(Tier::Field));
    assert_eq!(Tier::from_pair(4), Some(Tier::SuperExtended));
    assert_eq!(Tier::from_pair(5), None);
    assert_eq!(Tier::Subsquare.alphabet().as_bytes()[21], b'v');
}
