use crate::eval::{Bindings, EvalError, Function, Value};

use super::{
    check_latitude, check_longitude,
    consts::{EARTH_RADIUS_M, METERS_IN_KILOMETER, METERS_IN_MILE},
};

/// Measurement unit of the returned distance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Recognize a unit tag case-insensitively
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "m" => Some(Self::Meters),
            "km" => Some(Self::Kilometers),
            "mi" => Some(Self::Miles),
            _ => None,
        }
    }

    fn from_meters(self, meters: f64) -> f64 {
        match self {
            Self::Meters => meters,
            Self::Kilometers => meters / METERS_IN_KILOMETER,
            Self::Miles => meters / METERS_IN_MILE,
        }
    }
}

/// `geoDistance(lat1, lng1, lat2, lng2[, unit])`: the great-circle
/// distance between two coordinate pairs.
///
/// The result is a number in meters unless the optional unit tag asks for
/// kilometers (`'km'`) or miles (`'mi'`); full floating-point precision is
/// returned with no formatting applied.
#[derive(Debug, Copy, Clone, Default)]
pub struct GeoDistance;

impl Function for GeoDistance {
    fn call(&self, _bindings: &Bindings, args: &[Value]) -> Result<Value, EvalError> {
        if args.len() < 4 || args.len() > 5 {
            return Err(EvalError::arity(
                "geoDistance() expects 4 or 5 arguments: lat1, lng1, lat2, lng2, and optional unit ('m', 'km', 'mi')",
            ));
        }

        let lat1 = args[0].as_number().ok_or_else(|| {
            EvalError::bad_type("geoDistance() expects its first parameter to be a number")
        })?;
        let lng1 = args[1].as_number().ok_or_else(|| {
            EvalError::bad_type("geoDistance() expects its second parameter to be a number")
        })?;
        let lat2 = args[2].as_number().ok_or_else(|| {
            EvalError::bad_type("geoDistance() third argument (lat2) must be a number")
        })?;
        let lng2 = args[3].as_number().ok_or_else(|| {
            EvalError::bad_type("geoDistance() fourth argument (lng2) must be a number")
        })?;

        check_latitude("lat1", lat1)?;
        check_latitude("lat2", lat2)?;
        check_longitude("lng1", lng1)?;
        check_longitude("lng2", lng2)?;

        let unit = match args.get(4) {
            None => DistanceUnit::default(),
            Some(tag) => {
                let tag = tag.as_str().ok_or_else(|| {
                    EvalError::bad_type("geoDistance() fifth argument (unit) must be a string")
                })?;
                DistanceUnit::from_tag(tag).ok_or_else(|| {
                    EvalError::bad_value(
                        "geoDistance() unit must be 'm' (meters), 'km' (kilometers), or 'mi' (miles)",
                    )
                })?
            }
        };

        let meters = haversine_m(lat1, lng1, lat2, lng2);
        Ok(unit.from_meters(meters).into())
    }

    fn name(&self) -> &'static str {
        "geoDistance"
    }

    fn description(&self) -> &'static str {
        "Calculates the great circle distance between two coordinate pairs using the Haversine formula. \
         Usage: geoDistance(lat1, lng1, lat2, lng2) or geoDistance(lat1, lng1, lat2, lng2, unit)"
    }

    fn params(&self) -> &'static str {
        "number lat1, number lng1, number lat2, number lng2, optional string unit"
    }

    fn returns(&self) -> &'static str {
        "number"
    }
}

/// Haversine distance over the mean-radius sphere, in meters.
/// <https://en.wikipedia.org/wiki/Haversine_formula>
fn haversine_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let lam1 = lng1.to_radians();
    let lam2 = lng2.to_radians();

    let d_phi = phi2 - phi1;
    let d_lam = lam2 - lam1;

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lam / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
fn call(args: &[Value]) -> Result<Value, EvalError> {
    GeoDistance.call(&Bindings::new(), args)
}

#[cfg(test)]
fn call_ok(args: &[Value]) -> f64 {
    match call(args).unwrap() {
        Value::Float(d) => d,
        other => panic!("geoDistance() must evaluate to a number, got {other:?}"),
    }
}

#[cfg(test)]
const NEW_YORK: (f64, f64) = (40.7128, -74.0060);

#[cfg(test)]
const LOS_ANGELES: (f64, f64) = (34.0522, -118.2437);

#[cfg(test)]
mod distance_tests {
    use super::*;

    #[test]
    fn new_york_to_los_angeles() {
        let meters = call_ok(&[
            NEW_YORK.0.into(),
            NEW_YORK.1.into(),
            LOS_ANGELES.0.into(),
            LOS_ANGELES.1.into(),
        ]);
        assert!((meters - 3_935_000.0).abs() < 50_000.0);
    }

    #[test]
    fn same_point_is_zero() {
        let meters = call_ok(&[
            NEW_YORK.0.into(),
            NEW_YORK.1.into(),
            NEW_YORK.0.into(),
            NEW_YORK.1.into(),
        ]);
        assert!(meters.abs() < 1.0);
    }

    #[test]
    fn short_distance() {
        // about a hundredth of a degree of latitude
        let meters = call_ok(&[
            40.7128.into(),
            (-74.0060).into(),
            40.7228.into(),
            (-74.0060).into(),
        ]);
        assert!(meters > 1_000.0 && meters < 1_200.0);
    }

    #[test]
    fn pole_to_pole() {
        let meters = call_ok(&[90.0.into(), 0.0.into(), (-90.0).into(), 0.0.into()]);
        assert!((meters - 20_015_000.0).abs() < 100_000.0);
    }

    #[test]
    fn quarter_turn_along_the_equator() {
        let meters = call_ok(&[0.0.into(), 0.0.into(), 0.0.into(), 90.0.into()]);
        assert!((meters - 10_007_543.0).abs() < 10_000.0);
    }

    #[test]
    fn across_the_date_line() {
        // two degrees of longitude at the equator
        let meters = call_ok(&[0.0.into(), 179.0.into(), 0.0.into(), (-179.0).into()]);
        assert!(meters > 200_000.0 && meters < 250_000.0);
    }

    #[test]
    fn boundary_coordinates() {
        let meters = call_ok(&[90.0.into(), 180.0.into(), (-90.0).into(), (-180.0).into()]);
        assert!(meters.is_finite());
    }

    #[test]
    fn symmetric_in_the_endpoints() {
        let pairs = [
            (NEW_YORK, LOS_ANGELES),
            ((0.0, 0.0), (0.0, 90.0)),
            ((-33.8688, 151.2093), (51.5074, -0.1278)),
            ((90.0, 0.0), (-90.0, 0.0)),
        ];
        for ((lat1, lng1), (lat2, lng2)) in pairs {
            let forward = call_ok(&[lat1.into(), lng1.into(), lat2.into(), lng2.into()]);
            let backward = call_ok(&[lat2.into(), lng2.into(), lat1.into(), lng1.into()]);
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn integer_arguments() {
        let meters = call_ok(&[
            Value::Int(40),
            Value::Int(-74),
            Value::Int(41),
            Value::Int(-74),
        ]);
        assert!((meters - 111_195.0).abs() < 200.0);
    }
}
