use crate::latlon::LatLon;

/// Slack, in degrees, allowed on each edge by [`BoundingBox::contains`].
/// About 0.1 mm on the ground.
pub const EDGE_TOLERANCE: f64 = 1e-9;

/// Corners and center of the rectangle a [`GridLocator`](crate::GridLocator)
/// covers at its precision.
///
/// Corners on the northern or eastern edge of the grid may sit exactly on
/// latitude `90` or longitude `180`, which [`LatLon::create`] would reject,
/// so with the `serde` feature a box can be serialized but not deserialized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundingBox {
    pub(crate) ne: LatLon,
    pub(crate) se: LatLon,
    pub(crate) sw: LatLon,
    pub(crate) nw: LatLon,
    pub(crate) center: LatLon,
}

impl BoundingBox {
    /// Builds the box from its south-west corner and its size in degrees.
    pub(crate) fn from_south_west(sw: LatLon, width: f64, height: f64) -> BoundingBox {
        let (lat, lon) = (sw.latitude, sw.longitude);

        BoundingBox {
            ne: LatLon::new(lat + height, lon + width),
            se: LatLon::new(lat, lon + width),
            sw,
            nw: LatLon::new(lat + height, lon),
            center: LatLon::new(lat + height / 2.0, lon + width / 2.0),
        }
    }

    #[inline]
    pub fn ne(&self) -> LatLon {
        self.ne
    }

    #[inline]
    pub fn se(&self) -> LatLon {
        self.se
    }

    #[inline]
    pub fn sw(&self) -> LatLon {
        self.sw
    }

    #[inline]
    pub fn nw(&self) -> LatLon {
        self.nw
    }

    #[inline]
    pub fn center(&self) -> LatLon {
        self.center
    }

    /// East-west extent in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.ne.longitude - self.sw.longitude
    }

    /// North-south extent in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.ne.latitude - self.sw.latitude
    }

    /// Whether `point` falls inside the box, all four edges included.
    ///
    /// Edges are widened by [`EDGE_TOLERANCE`] degrees. Locator encoding
    /// works through a chain of remainders, so a point lying exactly on a
    /// cell edge can land in the neighbouring cell with the point sitting on
    /// that cell's northern or eastern edge, give or take a rounding error.
    /// A point on an edge shared by two cells is therefore inside both boxes.
    ///
    /// # Usage
    ///
    /// ```
    /// use maidenhead::{GridLocator, LatLon};
    ///
    /// let bounds = GridLocator::parse_str("CN87").unwrap().bounds();
    ///
    /// assert!(bounds.contains(&LatLon::create(47.609722, -122.333056).unwrap()));
    /// assert!(bounds.contains(&LatLon::create(47.0, -124.0).unwrap()));
    /// assert!(bounds.contains(&LatLon::create(48.0, -122.0).unwrap()));
    /// assert!(!bounds.contains(&LatLon::create(48.5, -123.0).unwrap()));
    /// ```
    pub fn contains(&self, point: &LatLon) -> bool {
        let lat = (self.sw.latitude - EDGE_TOLERANCE)..=(self.ne.latitude + EDGE_TOLERANCE);
        let lon = (self.sw.longitude - EDGE_TOLERANCE)..=(self.ne.longitude + EDGE_TOLERANCE);

        lat.contains(&point.latitude) && lon.contains(&point.longitude)
    }
}
