pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ARC_SECOND_SIGN: char = '"';

pub(crate) const MAX_LATITUDE_DEG: f64 = 90.0;
pub(crate) const MAX_LONGITUDE_DEG: f64 = 180.0;

/// Mean Earth radius in meters
/// <https://en.wikipedia.org/wiki/Earth_radius#Mean_radius>
pub(crate) const EARTH_RADIUS_M: f64 = 6_371_000.0;

pub(crate) const METERS_IN_KILOMETER: f64 = 1_000.0;
pub(crate) const METERS_IN_MILE: f64 = 1_609.344;
