use std::{fmt::Display, hash::Hash, str::FromStr};

use log::{debug, trace};
use num::Integer;

use crate::{
    Error,
    bounds::BoundingBox,
    constants::{LAT_OFFSET, LON_OFFSET, MAX_PRECISION},
    geometry::{self, Distance, GridCellSize},
    latlon::LatLon,
    tables::{boundary_degrees, Axis, Tier},
};

/// A validated Maidenhead grid locator of 1 to 5 character pairs, e.g.
/// `KI88jr`.
///
/// Each pair holds a longitude character followed by a latitude character.
/// Case is significant: fields and super extended squares are upper case,
/// subsquares are lower case.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct GridLocator {
    locator: String,
    /// South-west corner, resolved from the lookup tables while parsing
    sw: LatLon,
}

impl GridLocator {
    /// Parses and validates a locator string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocator`] if the length is not 2, 4, 6, 8 or 10
    /// or any character is outside the alphabet of its tier.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::GridLocator;
    ///
    /// let locator = GridLocator::parse_str("KI88jr").unwrap();
    /// assert_eq!(locator.precision(), 3);
    ///
    /// assert!(GridLocator::parse_str("ki88jr").is_err());
    /// assert!(GridLocator::parse_str("KI88j").is_err());
    /// ```
    pub fn parse_str(locator: &str) -> Result<GridLocator, Error> {
        Self::from_str(locator)
    }

    /// Whether `locator` is a well-formed locator of any supported length.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::GridLocator;
    ///
    /// assert!(GridLocator::is_valid("KI"));
    /// assert!(GridLocator::is_valid("KI88jr81BG"));
    /// assert!(!GridLocator::is_valid("KI88JR"));
    /// assert!(!GridLocator::is_valid("SI88"));
    /// assert!(!GridLocator::is_valid(""));
    /// ```
    pub fn is_valid(locator: &str) -> bool {
        south_west(locator).is_ok()
    }

    /// Converts from [`LatLon`] to a locator with `precision` character pairs.
    /// The full ten character locator is always computed, then cut down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if `precision` is not in `1..=5`.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::{GridLocator, LatLon};
    ///
    /// let coord = LatLon::create(47.609722, -122.333056).unwrap();
    ///
    /// assert_eq!(GridLocator::from_latlon(&coord, 5).unwrap().as_str(), "CN87uo06AH");
    /// assert_eq!(GridLocator::from_latlon(&coord, 2).unwrap().as_str(), "CN87");
    /// ```
    pub fn from_latlon(value: &LatLon, precision: usize) -> Result<GridLocator, Error> {
        if !(1..=MAX_PRECISION).contains(&precision) {
            debug!("Rejected locator precision {precision}");
            return Err(Error::InvalidPrecision(precision));
        }

        let mut locator = encode(value);
        locator.truncate(2 * precision);
        trace!("Encoded {value} as {locator}");

        locator.try_into()
    }

    /// Returns the locator string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.locator
    }

    /// Number of character pairs, from `1` (field) to `5` (super extended square).
    #[inline]
    pub fn precision(&self) -> usize {
        self.locator.len() / 2
    }

    /// The finest tier present in this locator.
    pub fn tier(&self) -> Tier {
        Tier::ALL[self.precision() - 1]
    }

    /// Returns the enclosing locator with `precision` character pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if `precision` is `0` or finer than
    /// this locator.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::GridLocator;
    ///
    /// let locator = GridLocator::parse_str("KI88jr81BG").unwrap();
    ///
    /// assert_eq!(locator.truncate(2).unwrap().as_str(), "KI88");
    /// assert!(locator.truncate(0).is_err());
    /// ```
    pub fn truncate(&self, precision: usize) -> Result<GridLocator, Error> {
        if !(1..=self.precision()).contains(&precision) {
            return Err(Error::InvalidPrecision(precision));
        }

        Self::from_str(&self.locator[..2 * precision])
    }

    /// Corners and center of the cell covered by this locator.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::GridLocator;
    ///
    /// let bounds = GridLocator::parse_str("CN87").unwrap().bounds();
    ///
    /// assert_eq!(bounds.sw().latitude(), 47.0);
    /// assert_eq!(bounds.sw().longitude(), -124.0);
    /// assert_eq!(bounds.ne().latitude(), 48.0);
    /// assert_eq!(bounds.ne().longitude(), -122.0);
    /// assert_eq!(bounds.center().latitude(), 47.5);
    /// assert_eq!(bounds.center().longitude(), -123.0);
    /// ```
    pub fn bounds(&self) -> BoundingBox {
        let tier = self.tier();
        BoundingBox::from_south_west(
            self.sw,
            tier.cell_size(Axis::Longitude),
            tier.cell_size(Axis::Latitude),
        )
    }

    /// Center of the cell covered by this locator.
    pub fn center(&self) -> LatLon {
        self.bounds().center
    }

    /// Whether `point` lies in the cell covered by this locator. See
    /// [`BoundingBox::contains`].
    pub fn contains(&self, point: &LatLon) -> bool {
        self.bounds().contains(point)
    }

    /// Edge lengths, perimeter and area of the cell covered by this locator.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::GridLocator;
    ///
    /// let size = GridLocator::parse_str("KI88jr").unwrap().size();
    ///
    /// assert!((size.area().square_kilometers() - 42.921).abs() < 1e-3);
    /// assert!((size.perimeter().kilometers() - 27.794).abs() < 1e-3);
    /// ```
    pub fn size(&self) -> GridCellSize {
        GridCellSize::from_bounds(&self.bounds())
    }

    /// Great-circle distance between the centers of two cells.
    pub fn distance_to(&self, other: &GridLocator) -> Distance {
        geometry::great_circle(&self.center(), &other.center())
    }

    /// Initial bearing in whole degrees from the center of this cell towards
    /// the center of `other`.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::GridLocator;
    ///
    /// let nairobi = GridLocator::parse_str("KI88jr").unwrap();
    /// let seattle = GridLocator::parse_str("CN87uo").unwrap();
    ///
    /// assert_eq!(nairobi.bearing_to(&seattle), 342.0);
    /// ```
    pub fn bearing_to(&self, other: &GridLocator) -> f64 {
        geometry::initial_bearing(&self.center(), &other.center())
    }
}

/// Index of the cell a scaled remainder falls in, kept inside the tier's alphabet
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_index(scaled: f64, tier: Tier) -> usize {
    (scaled as usize).min(tier.alphabet().len() - 1)
}

fn push_symbol(locator: &mut String, tier: Tier, idx: usize) {
    locator.push(char::from(tier.alphabet().as_bytes()[idx]));
}

/// Encodes a point as a full ten character locator.
///
/// Each tier works on the remainder left by the tier above it. The chain
/// has to be followed exactly as written: recomputing a tier straight from
/// the coordinate drifts points on a cell edge into the neighbouring cell.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn encode(value: &LatLon) -> String {
    let mut locator = String::with_capacity(2 * MAX_PRECISION);

    // Shift into [0,180) x [0,360)
    let lon = value.longitude + LON_OFFSET;
    let lat = value.latitude + LAT_OFFSET;

    // Field, 20 x 10 degrees
    let field_lon = cell_index(lon / 20.0, Tier::Field);
    let field_lat = cell_index(lat / 10.0, Tier::Field);
    push_symbol(&mut locator, Tier::Field, field_lon);
    push_symbol(&mut locator, Tier::Field, field_lat);

    // Square, 2 x 1 degrees. Remainders are in squares
    let square_lon = (lon - field_lon as f64 * 20.0) / 2.0;
    let square_lat = lat - field_lat as f64 * 10.0;
    push_symbol(&mut locator, Tier::Square, cell_index(square_lon, Tier::Square));
    push_symbol(&mut locator, Tier::Square, cell_index(square_lat, Tier::Square));

    // Subsquare, 5 x 2.5 minutes. Remainders are in degrees
    let sub_lon = square_lon * 2.0 - square_lon.trunc() * 2.0;
    let sub_lat = square_lat - square_lat.trunc();
    let sub_lon_scaled = (sub_lon * 12.0).trunc();
    let sub_lat_scaled = (sub_lat * 24.0).trunc();
    push_symbol(&mut locator, Tier::Subsquare, cell_index(sub_lon_scaled, Tier::Subsquare));
    push_symbol(&mut locator, Tier::Subsquare, cell_index(sub_lat_scaled, Tier::Subsquare));

    // Extended square, 30 x 15 seconds
    let ext_lon = sub_lon - sub_lon_scaled / 12.0;
    let ext_lat = sub_lat - sub_lat_scaled / 24.0;
    let ext_lon_scaled = ext_lon * 120.0;
    let ext_lat_scaled = ext_lat * 240.0;
    push_symbol(&mut locator, Tier::Extended, cell_index(ext_lon_scaled, Tier::Extended));
    push_symbol(&mut locator, Tier::Extended, cell_index(ext_lat_scaled, Tier::Extended));

    // Super extended square, 1.25 x 0.625 seconds
    let sup_lon = ext_lon - ext_lon_scaled.trunc() / 120.0;
    let sup_lat = ext_lat - ext_lat_scaled.trunc() / 240.0;
    push_symbol(&mut locator, Tier::SuperExtended, cell_index(sup_lon * 2880.0, Tier::SuperExtended));
    push_symbol(&mut locator, Tier::SuperExtended, cell_index(sup_lat * 5760.0, Tier::SuperExtended));

    locator
}

/// Validates `locator` and resolves its south-west corner by summing the
/// boundary offsets of every tier present, axis by axis.
fn south_west(locator: &str) -> Result<LatLon, Error> {
    let len = locator.len();

    if !locator.is_ascii() {
        return Err(Error::InvalidLocator(format!("Non-ASCII character in {locator}")));
    }

    if len == 0 || len.is_odd() || len > 2 * MAX_PRECISION {
        return Err(Error::InvalidLocator(format!("Length {len} of {locator} not one of 2, 4, 6, 8 or 10")));
    }

    let chars = locator.as_bytes();
    let mut lon = 0.0;
    let mut lat = 0.0;

    for (p, pair) in chars.chunks_exact(2).enumerate() {
        let tier = Tier::ALL[p];
        let lookup = |idx: usize, axis: Axis| {
            let ch = char::from(pair[idx]);
            boundary_degrees(tier, axis, ch).ok_or_else(|| {
                Error::InvalidLocator(format!(
                    "Character '{ch}' at position {} not in {tier:?} set {}",
                    2 * p + idx,
                    tier.alphabet(),
                ))
            })
        };

        lon += lookup(0, Axis::Longitude)?;
        lat += lookup(1, Axis::Latitude)?;
    }

    Ok(LatLon::new(lat, lon))
}

/// Single entry point for building a [`GridLocator`] from text.
fn validated(locator: String) -> Result<GridLocator, Error> {
    match south_west(&locator) {
        Ok(sw) => Ok(GridLocator { locator, sw }),
        Err(err) => {
            debug!("{err}");
            Err(err)
        }
    }
}

impl FromStr for GridLocator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validated(s.to_string())
    }
}

impl TryFrom<String> for GridLocator {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validated(value)
    }
}

impl TryFrom<&str> for GridLocator {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl From<GridLocator> for String {
    fn from(value: GridLocator) -> Self {
        value.locator
    }
}

impl AsRef<str> for GridLocator {
    fn as_ref(&self) -> &str {
        &self.locator
    }
}

impl PartialEq for GridLocator {
    fn eq(&self, other: &Self) -> bool {
        self.locator == other.locator
    }
}

impl Eq for GridLocator {}

impl Hash for GridLocator {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.locator.hash(state);
    }
}

impl Display for GridLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.locator)
    }
}
