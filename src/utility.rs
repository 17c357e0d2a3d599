#[allow(dead_code)]
pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Seconds per minute
    pub const MS: i32 = 60;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
    /// Seconds per degree
    pub const DS: i32 = DM * MS;
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn eps_eq(&self, other: Self) -> bool;
    fn ang_wrap(&self) -> Self;
    fn minutes_to_degrees(&self) -> Self;
    fn seconds_to_degrees(&self) -> Self;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    /// Wraps an angle in degrees into `[0, 360)`
    fn ang_wrap(&self) -> f64 {
        let td = f64::from(dms::TD);
        let value = self.rem_euclid(td);
        // rem_euclid can round up to exactly 360 for tiny negative inputs,
        // and keeps the sign of -0
        if value.eps_eq(td) || value.is_zero() { 0.0 } else { value }
    }

    fn minutes_to_degrees(&self) -> f64 {
        *self / f64::from(dms::DM)
    }

    fn seconds_to_degrees(&self) -> f64 {
        *self / f64::from(dms::DS)
    }
}
