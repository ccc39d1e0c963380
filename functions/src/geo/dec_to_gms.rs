use crate::eval::{Bindings, EvalError, Function, Value};

use super::{
    check_latitude, check_longitude,
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
};

/// Which axis a decimal-degree value measures.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum CoordAxis {
    Lat,
    Lng,
}

impl CoordAxis {
    /// Recognize a tag case-insensitively, folding the `"lon"` spelling
    /// into [`Lng`](Self::Lng).
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "lat" => Some(Self::Lat),
            "lng" | "lon" => Some(Self::Lng),
            _ => None,
        }
    }

    /// The hemisphere marker appended to the formatted angle
    fn suffix(self, negative: bool) -> &'static str {
        match (self, negative) {
            (Self::Lat, false) => " N",
            (Self::Lat, true) => " S",
            (Self::Lng, false) => " E",
            (Self::Lng, true) => " W",
        }
    }
}

/// `decToGMS(decimal)` / `decToGMS(decimal, coordType)`: a decimal-degree
/// value rendered in degree-minute-second notation.
///
/// Tagging the value as `'lat'` or `'lng'`/`'lon'` enables range
/// validation and picks the hemisphere suffix; untagged negative values
/// are marked `" (-)"` instead.
#[derive(Debug, Copy, Clone, Default)]
pub struct DecToGms;

impl Function for DecToGms {
    fn call(&self, _bindings: &Bindings, args: &[Value]) -> Result<Value, EvalError> {
        if args.is_empty() || args.len() > 2 {
            return Err(EvalError::arity(
                "decToGMS() expects one or two arguments: decimal degrees and optional coordinate type",
            ));
        }

        let decimal = args[0].as_number().ok_or_else(|| {
            EvalError::bad_type("decToGMS() expects its first parameter to be a number")
        })?;

        // a wrong kind and an unrecognized tag share one error channel
        let axis = match args.get(1) {
            None => None,
            Some(tag) => Some(tag.as_str().and_then(CoordAxis::from_tag).ok_or_else(
                || {
                    EvalError::bad_type(
                        "decToGMS() expects its second parameter to be one of 'lat', 'lng' or 'lon'",
                    )
                },
            )?),
        };

        match axis {
            Some(CoordAxis::Lat) => check_latitude("Latitude", decimal)?,
            Some(CoordAxis::Lng) => check_longitude("Longitude", decimal)?,
            None => {}
        }

        Ok(to_gms(decimal, axis).into())
    }

    fn name(&self) -> &'static str {
        "decToGMS"
    }

    fn description(&self) -> &'static str {
        "Converts decimal degrees to degrees, minutes, seconds format. \
         Usage: decToGMS(decimal) or decToGMS(decimal, 'lat'|'lng')"
    }

    fn params(&self) -> &'static str {
        "number decimal, optional string coordType"
    }

    fn returns(&self) -> &'static str {
        "string"
    }
}

/// Truncation-based split of the magnitude into degree, minute and second
/// fields.
///
/// Near a minute boundary the seconds field can itself round to `60.00`
/// for display; the carry is not propagated back into minutes or degrees.
/// Untagged input is not range-limited, so the degrees cast saturates for
/// magnitudes beyond `u64::MAX`.
fn to_gms(decimal: f64, axis: Option<CoordAxis>) -> String {
    let negative = decimal < 0.0;
    let magnitude = decimal.abs();

    let degrees = magnitude.trunc();
    let minutes_full = (magnitude - degrees) * MINUTES_IN_DEGREE;
    let minutes = minutes_full.trunc();
    let seconds = (minutes_full - minutes) * SECONDS_IN_MINUTE;

    let suffix = match axis {
        Some(axis) => axis.suffix(negative),
        None if negative => " (-)",
        None => "",
    };

    format!(
        "{deg}{DEGREE_SIGN} {min}{ARC_MINUTE_SIGN} {seconds:.2}{ARC_SECOND_SIGN}{suffix}",
        deg = degrees as u64,
        min = minutes as u64,
    )
}

#[cfg(test)]
fn call(args: &[Value]) -> Result<Value, EvalError> {
    DecToGms.call(&Bindings::new(), args)
}

#[cfg(test)]
fn call_ok(args: &[Value]) -> String {
    match call(args).unwrap() {
        Value::Str(s) => s,
        other => panic!("decToGMS() must evaluate to a string, got {other:?}"),
    }
}



#[cfg(test)]
mod range_tests {
    use crate::eval::ErrorKind;

    use super::*;

    #[test]
    fn latitude_too_high() {
        let err = call(&[91.0.into(), "lat".into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.message(), "Latitude must be between -90 and 90 degrees");
    }

    #[test]
    fn latitude_too_low() {
        let err = call(&[(-91.0).into(), "lat".into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn longitude_too_high() {
        let err = call(&[181.0.into(), "lng".into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.message(),
            "Longitude must be between -180 and 180 degrees"
        );
    }

    #[test]
    fn longitude_too_low() {
        let err = call(&[(-181.0).into(), "lon".into()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(call(&[90.0.into(), "lat".into()]).is_ok());
        assert!(call(&[(-90.0).into(), "lat".into()]).is_ok());
        assert!(call(&[180.0.into(), "lng".into()]).is_ok());
        assert!(call(&[(-180.0).into(), "lng".into()]).is_ok());
    }

    #[test]
    fn type_check_precedes_range_check() {
        // a non-string tag reports Type even though the value is also
        // outside any coordinate range
        let err = call(&[5000.0.into(), Value::Bool(true)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
