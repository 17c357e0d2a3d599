// Earth radius in each distance unit, applied to a central angle in radians
pub(crate) const EARTH_RADIUS_KM: f64 = 6371.0210;
pub(crate) const EARTH_RADIUS_SMI: f64 = 3958.7613;
pub(crate) const EARTH_RADIUS_NMI: f64 = 3437.8675;

// Offsets that move lat/lon into the all-positive space [0,180) x [0,360)
pub(crate) const LAT_OFFSET: f64 = 90.0;
pub(crate) const LON_OFFSET: f64 = 180.0;

/// Maximum number of character pairs in a locator
pub(crate) const MAX_PRECISION: usize = 5;
