//! Lookup tables for the five Maidenhead precision tiers.
//!
//! Each tier has an ordered alphabet, used to turn a cell index into a
//! character, and a pair of boundary maps (one per axis) giving the offset
//! of a cell's south-west edge within its parent cell. Boundary values are
//! stored in the tier's natural unit: degrees for fields and squares,
//! minutes for subsquares and seconds for the two extended tiers.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{utility::GeoMath, ThisOrThat};

pub const FIELD_ALPHABET: &str = "ABCDEFGHIJKLMNOPQR";
pub const DIGIT_ALPHABET: &str = "0123456789";
pub const SUBSQUARE_ALPHABET: &str = "abcdefghijklmnopqrstuvwx";
pub const SUPER_EXTENDED_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWX";

/// The precision tiers of a locator, coarsest first. The `n`th character
/// pair of a locator belongs to the `n`th tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// 20° x 10°, letters `A-R`
    Field,
    /// 2° x 1°, digits `0-9`
    Square,
    /// 5' x 2.5', letters `a-x`
    Subsquare,
    /// 30" x 15", digits `0-9`
    Extended,
    /// 1.25" x 0.625", letters `A-X`
    SuperExtended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Field,
        Tier::Square,
        Tier::Subsquare,
        Tier::Extended,
        Tier::SuperExtended,
    ];

    /// Tier of the `pair`th character pair (zero based).
    pub fn from_pair(pair: usize) -> Option<Tier> {
        Self::ALL.get(pair).copied()
    }

    pub fn alphabet(self) -> &'static str {
        match self {
            Tier::Field => FIELD_ALPHABET,
            Tier::Square | Tier::Extended => DIGIT_ALPHABET,
            Tier::Subsquare => SUBSQUARE_ALPHABET,
            Tier::SuperExtended => SUPER_EXTENDED_ALPHABET,
        }
    }

    /// Width (longitude) or height (latitude) of one cell of this tier, in degrees.
    pub fn cell_size(self, axis: Axis) -> f64 {
        let lon = axis == Axis::Longitude;
        match self {
            Tier::Field => lon.ternary(20.0, 10.0),
            Tier::Square => lon.ternary(2.0, 1.0),
            Tier::Subsquare => lon.ternary(5.0, 2.5).minutes_to_degrees(),
            Tier::Extended => lon.ternary(30.0, 15.0).seconds_to_degrees(),
            Tier::SuperExtended => lon.ternary(1.25, 0.625).seconds_to_degrees(),
        }
    }

    /// Converts a boundary value from this tier's natural unit to degrees.
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            Tier::Field | Tier::Square => value,
            Tier::Subsquare => value.minutes_to_degrees(),
            Tier::Extended | Tier::SuperExtended => value.seconds_to_degrees(),
        }
    }

    fn table(self, axis: Axis) -> &'static HashMap<char, f64> {
        let lon = axis == Axis::Longitude;
        match self {
            Tier::Field => lon.ternary(&*LON_FIELD, &*LAT_FIELD),
            Tier::Square => lon.ternary(&*LON_SQUARE, &*LAT_SQUARE),
            Tier::Subsquare => lon.ternary(&*LON_SUBSQUARE, &*LAT_SUBSQUARE),
            Tier::Extended => lon.ternary(&*LON_EXTENDED, &*LAT_EXTENDED),
            Tier::SuperExtended => lon.ternary(&*LON_SUPER_EXTENDED, &*LAT_SUPER_EXTENDED),
        }
    }
}

/// Looks up the boundary offset for `ch` in the natural unit of `tier`.
/// Characters outside the tier's alphabet (including the wrong case) give
/// `None`.
///
/// # Usage
///
/// ```
/// use maidenhead::tables::{boundary, Axis, Tier};
///
/// assert_eq!(boundary(Tier::Field, Axis::Longitude, 'K'), Some(20.0));
/// assert_eq!(boundary(Tier::Subsquare, Axis::Longitude, 'v'), Some(105.0));
/// assert_eq!(boundary(Tier::Subsquare, Axis::Latitude, 'V'), None);
/// ```
pub fn boundary(tier: Tier, axis: Axis, ch: char) -> Option<f64> {
    tier.table(axis).get(&ch).copied()
}

/// Same as [`boundary`] but converted to degrees.
pub fn boundary_degrees(tier: Tier, axis: Axis, ch: char) -> Option<f64> {
    boundary(tier, axis, ch).map(|value| tier.to_degrees(value))
}

// ============================== Latitude ==============================

// Field boundaries in degrees
const LAT_FIELD_DATA: [(char, f64); 18] = [
    ('A', -90.0), ('B', -80.0), ('C', -70.0), ('D', -60.0), ('E', -50.0), ('F', -40.0),
    ('G', -30.0), ('H', -20.0), ('I', -10.0), ('J',   0.0), ('K',  10.0), ('L',  20.0),
    ('M',  30.0), ('N',  40.0), ('O',  50.0), ('P',  60.0), ('Q',  70.0), ('R',  80.0),
];

// Square boundaries in degrees
const LAT_SQUARE_DATA: [(char, f64); 10] = [
    ('0', 0.0), ('1', 1.0), ('2', 2.0), ('3', 3.0), ('4', 4.0),
    ('5', 5.0), ('6', 6.0), ('7', 7.0), ('8', 8.0), ('9', 9.0),
];

// Subsquare boundaries in minutes
const LAT_SUBSQUARE_DATA: [(char, f64); 24] = [
    ('a',  0.0), ('b',  2.5), ('c',  5.0), ('d',  7.5), ('e', 10.0), ('f', 12.5),
    ('g', 15.0), ('h', 17.5), ('i', 20.0), ('j', 22.5), ('k', 25.0), ('l', 27.5),
    ('m', 30.0), ('n', 32.5), ('o', 35.0), ('p', 37.5), ('q', 40.0), ('r', 42.5),
    ('s', 45.0), ('t', 47.5), ('u', 50.0), ('v', 52.5), ('w', 55.0), ('x', 57.5),
];

// Extended square boundaries in seconds
const LAT_EXTENDED_DATA: [(char, f64); 10] = [
    ('0',   0.0), ('1',  15.0), ('2',  30.0), ('3',  45.0), ('4',  60.0),
    ('5',  75.0), ('6',  90.0), ('7', 105.0), ('8', 120.0), ('9', 135.0),
];

// Super extended square boundaries in seconds
const LAT_SUPER_EXTENDED_DATA: [(char, f64); 24] = [
    ('A',  0.0  ), ('B',  0.625), ('C',  1.25 ), ('D',  1.875), ('E',  2.5  ), ('F',  3.125),
    ('G',  3.75 ), ('H',  4.375), ('I',  5.0  ), ('J',  5.625), ('K',  6.25 ), ('L',  6.875),
    ('M',  7.5  ), ('N',  8.125), ('O',  8.75 ), ('P',  9.375), ('Q', 10.0  ), ('R', 10.625),
    ('S', 11.25 ), ('T', 11.875), ('U', 12.5  ), ('V', 13.125), ('W', 13.75 ), ('X', 14.375),
];

// ============================== Longitude =============================

// Field boundaries in degrees
const LON_FIELD_DATA: [(char, f64); 18] = [
    ('A', -180.0), ('B', -160.0), ('C', -140.0), ('D', -120.0), ('E', -100.0), ('F', -80.0),
    ('G',  -60.0), ('H',  -40.0), ('I',  -20.0), ('J',    0.0), ('K',   20.0), ('L',  40.0),
    ('M',   60.0), ('N',   80.0), ('O',  100.0), ('P',  120.0), ('Q',  140.0), ('R', 160.0),
];

// Square boundaries in degrees
const LON_SQUARE_DATA: [(char, f64); 10] = [
    ('0',  0.0), ('1',  2.0), ('2',  4.0), ('3',  6.0), ('4',  8.0),
    ('5', 10.0), ('6', 12.0), ('7', 14.0), ('8', 16.0), ('9', 18.0),
];

// Subsquare boundaries in minutes
const LON_SUBSQUARE_DATA: [(char, f64); 24] = [
    ('a',  0.0), ('b',  5.0), ('c',  10.0), ('d',  15.0), ('e',  20.0), ('f',  25.0),
    ('g', 30.0), ('h', 35.0), ('i',  40.0), ('j',  45.0), ('k',  50.0), ('l',  55.0),
    ('m', 60.0), ('n', 65.0), ('o',  70.0), ('p',  75.0), ('q',  80.0), ('r',  85.0),
    ('s', 90.0), ('t', 95.0), ('u', 100.0), ('v', 105.0), ('w', 110.0), ('x', 115.0),
];

// Extended square boundaries in seconds
const LON_EXTENDED_DATA: [(char, f64); 10] = [
    ('0',   0.0), ('1',  30.0), ('2',  60.0), ('3',  90.0), ('4', 120.0),
    ('5', 150.0), ('6', 180.0), ('7', 210.0), ('8', 240.0), ('9', 270.0),
];

// Super extended square boundaries in seconds
const LON_SUPER_EXTENDED_DATA: [(char, f64); 24] = [
    ('A',  0.0 ), ('B',  1.25), ('C',  2.5 ), ('D',  3.75), ('E',  5.0 ), ('F',  6.25),
    ('G',  7.5 ), ('H',  8.75), ('I', 10.0 ), ('J', 11.25), ('K', 12.5 ), ('L', 13.75),
    ('M', 15.0 ), ('N', 16.25), ('O', 17.5 ), ('P', 18.75), ('Q', 20.0 ), ('R', 21.25),
    ('S', 22.5 ), ('T', 23.75), ('U', 25.0 ), ('V', 26.25), ('W', 27.5 ), ('X', 28.75),
];

lazy_static! {
    static ref LAT_FIELD: HashMap<char, f64> = HashMap::from(LAT_FIELD_DATA);
    static ref LAT_SQUARE: HashMap<char, f64> = HashMap::from(LAT_SQUARE_DATA);
    static ref LAT_SUBSQUARE: HashMap<char, f64> = HashMap::from(LAT_SUBSQUARE_DATA);
    static ref LAT_EXTENDED: HashMap<char, f64> = HashMap::from(LAT_EXTENDED_DATA);
    static ref LAT_SUPER_EXTENDED: HashMap<char, f64> = HashMap::from(LAT_SUPER_EXTENDED_DATA);

    static ref LON_FIELD: HashMap<char, f64> = HashMap::from(LON_FIELD_DATA);
    static ref LON_SQUARE: HashMap<char, f64> = HashMap::from(LON_SQUARE_DATA);
    static ref LON_SUBSQUARE: HashMap<char, f64> = HashMap::from(LON_SUBSQUARE_DATA);
    static ref LON_EXTENDED: HashMap<char, f64> = HashMap::from(LON_EXTENDED_DATA);
    static ref LON_SUPER_EXTENDED: HashMap<char, f64> = HashMap::from(LON_SUPER_EXTENDED_DATA);
}
