use std::fmt;

use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::enum_trivial_from_impl;

/// A dynamically-typed value exchanged with the host evaluator.
///
/// Host cells are heterogeneous, so arguments arrive as a tagged union and
/// get pattern-matched at the validation boundary. Only the numeric and
/// string variants carry data the functions in this crate act on; the
/// others exist so any cell content can flow through a call unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Integral number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Text
    Str(String),
    /// Boolean
    Bool(bool),
    /// Missing value
    Null,
}

impl Value {
    /// The numeric content, if the value is a number of either kind.
    ///
    /// Integers are widened to `f64`, the way the host reads any numeric
    /// cell as a double.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => i.to_f64(),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The textual content, if the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

enum_trivial_from_impl!(i64 => Value:Int);
enum_trivial_from_impl!(f64 => Value:Float);
enum_trivial_from_impl!(String => Value:Str);
enum_trivial_from_impl!(bool => Value:Bool);

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::Str(val.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}
