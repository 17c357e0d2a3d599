use std::fmt::Display;

use log::debug;

use crate::{
    Error,
    constants::{LAT_OFFSET, LON_OFFSET},
    geometry::{self, Distance},
    locator::GridLocator,
};

/// Representation of a latitude/longitude point in degrees. Can be converted
/// to a [`GridLocator`] of any precision.
///
/// Points created through [`LatLon::create`] always lie strictly inside the
/// open ranges `(-90, 90)` and `(-180, 180)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLatLon"))]
pub struct LatLon {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

/// Unchecked wire form of [`LatLon`]; deserialization goes through
/// [`LatLon::create`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLatLon {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon")]
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLatLon> for LatLon {
    type Error = Error;

    fn try_from(value: RawLatLon) -> Result<Self, Self::Error> {
        LatLon::create(value.latitude, value.longitude)
    }
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range (-90,90)
    /// * Longitude must be in range (-180,180)
    ///
    /// Both ends are excluded, so the poles and the antimeridian itself are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::LatLon;
    ///
    /// let coord = LatLon::create(-1.286389, 36.817222);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), -1.286389);
    /// assert_eq!(coord.longitude(), 36.817222);
    ///
    /// assert!(LatLon::create(90.0, 0.0).is_err());
    /// assert!(LatLon::create(0.0, 180.0).is_err());
    /// assert!(LatLon::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        Self::check(lat, lon, "").map_err(|err| {
            debug!("Rejected coordinate ({lat}, {lon}): {err}");
            err
        })
    }

    /// Range check shared by the single and two-point operations. `label` is
    /// prefixed to the message so callers can tell which point failed.
    pub(crate) fn check(lat: f64, lon: f64, label: &str) -> Result<LatLon, Error> {
        if !(lat > -LAT_OFFSET && lat < LAT_OFFSET) {
            Err(Error::InvalidCoord(format!("{label}Latitude {lat} outside of valid range (-90, 90).")))
        } else if !(lon > -LON_OFFSET && lon < LON_OFFSET) {
            Err(Error::InvalidCoord(format!("{label}Longitude {lon} outside of valid range (-180, 180).")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other`, computed with the spherical law of cosines.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::LatLon;
    ///
    /// let nairobi = LatLon::create(-1.286389, 36.817222).unwrap();
    /// let seattle = LatLon::create(47.609722, -122.333056).unwrap();
    ///
    /// let distance = nairobi.distance_to(&seattle);
    /// assert!((distance.kilometers() - 14485.926).abs() < 1e-3);
    /// ```
    pub fn distance_to(&self, other: &LatLon) -> Distance {
        geometry::great_circle(self, other)
    }

    /// Initial bearing, in whole degrees `[0, 360)`, from this point towards `other`.
    ///
    /// The bearing of a point to itself is `0`.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::LatLon;
    ///
    /// let nairobi = LatLon::create(-1.286389, 36.817222).unwrap();
    /// let seattle = LatLon::create(47.609722, -122.333056).unwrap();
    ///
    /// assert_eq!(nairobi.bearing_to(&seattle), 342.0);
    /// assert_eq!(seattle.bearing_to(&nairobi), 28.0);
    /// ```
    pub fn bearing_to(&self, other: &LatLon) -> f64 {
        geometry::initial_bearing(self, other)
    }

    /// Converts from [`LatLon`] to a [`GridLocator`] with `precision` character pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if `precision` is not in `1..=5`.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::LatLon;
    ///
    /// let coord = LatLon::create(-1.286389, 36.817222).unwrap();
    ///
    /// assert_eq!(coord.to_grid_locator(3).unwrap().to_string(), "KI88jr");
    /// assert!(coord.to_grid_locator(6).is_err());
    /// ```
    pub fn to_grid_locator(&self, precision: usize) -> Result<GridLocator, Error> {
        GridLocator::from_latlon(self, precision)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
