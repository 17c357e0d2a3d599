#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use log::debug;
use thiserror::Error;

pub mod bounds;
pub mod geometry;
pub mod latlon;
pub mod locator;
pub mod tables;
pub(crate) mod utility;

pub use bounds::BoundingBox;
pub use geometry::{Area, Distance, GridCellSize};
pub use latlon::LatLon;
pub use locator::GridLocator;

pub(crate) mod constants;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Grid locator is invalid: {0}")]
    InvalidLocator(String),
    #[error("Locator precision {0} not in [1, 5] character pairs")]
    InvalidPrecision(usize),
}

/// Whether `locator` is a well-formed grid locator of 2, 4, 6, 8 or 10
/// characters.
///
/// ```
/// assert!(maidenhead::is_valid_grid_locator("KI88jr"));
/// assert!(!maidenhead::is_valid_grid_locator("ki88jr"));
/// ```
pub fn is_valid_grid_locator(locator: &str) -> bool {
    GridLocator::is_valid(locator)
}

/// Converts a lat/lon pair to its full ten character grid locator. Cut the
/// result down for a coarser locator.
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if latitude is not in `(-90, 90)` or
/// longitude is not in `(-180, 180)`.
///
/// ```
/// let locator = maidenhead::coordinate_to_grid_locator(-1.286389, 36.817222).unwrap();
/// assert_eq!(locator, "KI88jr81BG");
///
/// assert!(maidenhead::coordinate_to_grid_locator(90.0, 0.0).is_err());
/// ```
pub fn coordinate_to_grid_locator(lat: f64, lon: f64) -> Result<String, Error> {
    let coord = LatLon::create(lat, lon)?;
    Ok(locator::encode(&coord))
}

/// Corners and center of the cell `locator` covers.
///
/// # Errors
///
/// Returns [`Error::InvalidLocator`] if `locator` is malformed.
pub fn grid_locator_bounds(locator: &str) -> Result<BoundingBox, Error> {
    Ok(GridLocator::parse_str(locator)?.bounds())
}

/// Great-circle distance between two lat/lon points.
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if either point is out of range.
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<Distance, Error> {
    let (start, end) = check_pair(lat1, lon1, lat2, lon2)?;
    Ok(start.distance_to(&end))
}

/// Great-circle distance between the centers of two locators.
///
/// # Errors
///
/// Returns [`Error::InvalidLocator`] if either locator is malformed.
pub fn distance_between_locators(locator1: &str, locator2: &str) -> Result<Distance, Error> {
    let start = GridLocator::parse_str(locator1)?;
    let end = GridLocator::parse_str(locator2)?;
    Ok(start.distance_to(&end))
}

/// Initial bearing in whole degrees `[0, 360)` from the first point to the
/// second. The bearing from a point to itself is `0`.
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if either point is out of range.
///
/// ```
/// let bearing = maidenhead::bearing_from_coordinates(0.0, 0.0, 0.0, -10.0).unwrap();
/// assert_eq!(bearing, 270.0);
/// ```
pub fn bearing_from_coordinates(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, Error> {
    let (start, end) = check_pair(lat1, lon1, lat2, lon2)?;
    Ok(start.bearing_to(&end))
}

/// Initial bearing in whole degrees from the center of the first locator to
/// the center of the second.
///
/// # Errors
///
/// Returns [`Error::InvalidLocator`] if either locator is malformed.
pub fn bearing_from_locators(locator1: &str, locator2: &str) -> Result<f64, Error> {
    let start = GridLocator::parse_str(locator1)?;
    let end = GridLocator::parse_str(locator2)?;
    Ok(start.bearing_to(&end))
}

/// Edge lengths, perimeter and area of the cell `locator` covers.
///
/// # Errors
///
/// Returns [`Error::InvalidLocator`] if `locator` is malformed.
pub fn grid_cell_size(locator: &str) -> Result<GridCellSize, Error> {
    Ok(GridLocator::parse_str(locator)?.size())
}

/// Validates both ends of a two-point operation before any math is done.
fn check_pair(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<(LatLon, LatLon), Error> {
    LatLon::check(lat1, lon1, "Start point: ")
        .and_then(|start| Ok((start, LatLon::check(lat2, lon2, "End point: ")?)))
        .map_err(|err| {
            debug!("Rejected points ({lat1}, {lon1}) -> ({lat2}, {lon2}): {err}");
            err
        })
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
