//! The geographic functions this crate contributes to the host

use crate::eval::{EvalError, Function};

mod consts;
mod dec_to_gms;
mod distance;

pub use dec_to_gms::DecToGms;
pub use distance::GeoDistance;

use consts::{MAX_LATITUDE_DEG, MAX_LONGITUDE_DEG};

/// Every function this crate contributes, boxed for a host function table.
///
/// ```
/// use geo_functions::{functions, Bindings, Function, Value};
///
/// let table = functions();
/// let dms = table[0]
///     .call(&Bindings::new(), &[Value::Float(40.7128)])
///     .unwrap();
/// assert_eq!(dms, Value::Str("40° 42' 46.08\"".into()));
/// ```
pub fn functions() -> Vec<Box<dyn Function>> {
    vec![Box::new(DecToGms), Box::new(GeoDistance)]
}

/// Reject a latitude outside `[-90, 90]` degrees, inclusive.
///
/// `NaN` passes through: the comparison-based check mirrors the host's
/// convention of validating only orderable values.
pub(crate) fn check_latitude(name: &str, degrees: f64) -> Result<(), EvalError> {
    if degrees < -MAX_LATITUDE_DEG || degrees > MAX_LATITUDE_DEG {
        return Err(EvalError::out_of_range(format!(
            "{name} must be between -90 and 90 degrees"
        )));
    }
    Ok(())
}

/// Reject a longitude outside `[-180, 180]` degrees, inclusive.
pub(crate) fn check_longitude(name: &str, degrees: f64) -> Result<(), EvalError> {
    if degrees < -MAX_LONGITUDE_DEG || degrees > MAX_LONGITUDE_DEG {
        return Err(EvalError::out_of_range(format!(
            "{name} must be between -180 and 180 degrees"
        )));
    }
    Ok(())
}
