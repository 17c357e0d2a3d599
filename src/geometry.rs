//! Great-circle distance, initial bearing and grid cell size.

use crate::{
    bounds::BoundingBox,
    constants::{EARTH_RADIUS_KM, EARTH_RADIUS_NMI, EARTH_RADIUS_SMI},
    latlon::LatLon,
    utility::GeoMath,
};

/// A great-circle distance expressed in kilometers, statute miles and
/// nautical miles. All three come from the same central angle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Distance {
    pub(crate) kilometers: f64,
    pub(crate) statute_miles: f64,
    pub(crate) nautical_miles: f64,
}

impl Distance {
    fn from_angle(angle: f64) -> Distance {
        Distance {
            kilometers: angle * EARTH_RADIUS_KM,
            statute_miles: angle * EARTH_RADIUS_SMI,
            nautical_miles: angle * EARTH_RADIUS_NMI,
        }
    }

    #[inline]
    pub fn kilometers(&self) -> f64 {
        self.kilometers
    }

    #[inline]
    pub fn statute_miles(&self) -> f64 {
        self.statute_miles
    }

    #[inline]
    pub fn nautical_miles(&self) -> f64 {
        self.nautical_miles
    }
}

impl std::ops::Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance {
            kilometers: self.kilometers + rhs.kilometers,
            statute_miles: self.statute_miles + rhs.statute_miles,
            nautical_miles: self.nautical_miles + rhs.nautical_miles,
        }
    }
}

/// Surface area in square kilometers and square statute miles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Area {
    pub(crate) square_kilometers: f64,
    pub(crate) square_miles: f64,
}

impl Area {
    #[inline]
    pub fn square_kilometers(&self) -> f64 {
        self.square_kilometers
    }

    #[inline]
    pub fn square_miles(&self) -> f64 {
        self.square_miles
    }
}

/// Edge lengths, perimeter and approximate area of a grid cell.
///
/// The cell is treated as a trapezoid: its east and west edges are assumed
/// equal and the area is the mean of the north and south edges times the
/// east/west edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridCellSize {
    pub(crate) area: Area,
    pub(crate) perimeter: Distance,
    pub(crate) north: Distance,
    pub(crate) south: Distance,
    pub(crate) east_west: Distance,
}

impl GridCellSize {
    pub(crate) fn from_bounds(bounds: &BoundingBox) -> GridCellSize {
        let north = great_circle(&bounds.nw, &bounds.ne);
        let south = great_circle(&bounds.sw, &bounds.se);
        let east_west = great_circle(&bounds.ne, &bounds.se);

        let area = Area {
            square_kilometers: (north.kilometers + south.kilometers) / 2.0 * east_west.kilometers,
            square_miles: (north.statute_miles + south.statute_miles) / 2.0 * east_west.statute_miles,
        };

        GridCellSize {
            area,
            perimeter: north + south + east_west + east_west,
            north,
            south,
            east_west,
        }
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }

    #[inline]
    pub fn perimeter(&self) -> Distance {
        self.perimeter
    }

    /// Length of the northern edge (NW to NE).
    #[inline]
    pub fn north(&self) -> Distance {
        self.north
    }

    /// Length of the southern edge (SW to SE).
    #[inline]
    pub fn south(&self) -> Distance {
        self.south
    }

    /// Length of the eastern edge (NE to SE), also used for the western edge.
    #[inline]
    pub fn east_west(&self) -> Distance {
        self.east_west
    }
}

/// Distance between two points using the spherical law of cosines. Doesn't
/// check the points, so cell corners on the poles or the antimeridian are
/// accepted.
pub(crate) fn great_circle(start: &LatLon, end: &LatLon) -> Distance {
    // The cosine sum rounds to just under 1 for coincident points
    if start.latitude.eps_eq(end.latitude) && start.longitude.eps_eq(end.longitude) {
        return Distance::from_angle(0.0);
    }

    let lat1 = start.latitude.to_radians();
    let lat2 = end.latitude.to_radians();
    let dlon = start.longitude.to_radians() - end.longitude.to_radians();

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    // Rounding can push the cosine just past +/-1 for coincident or antipodal points
    let angle = num::clamp(cos_angle, -1.0, 1.0).acos();

    Distance::from_angle(angle)
}

/// Initial great-circle bearing from `start` to `end`, rounded to the
/// nearest degree (ties to even) and wrapped into `[0, 360)`.
pub(crate) fn initial_bearing(start: &LatLon, end: &LatLon) -> f64 {
    let lat1 = start.latitude.to_radians();
    let lat2 = end.latitude.to_radians();
    let dlon = end.longitude.to_radians() - start.longitude.to_radians();

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    // atan2(0, 0) is 0, so identical points face north
    let bearing = x.atan2(y).to_degrees();

    bearing.ang_wrap().round_ties_even().ang_wrap()
}
