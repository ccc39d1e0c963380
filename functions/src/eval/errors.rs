use std::{error::Error, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of an argument-validation failure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// Wrong number of positional arguments
    Arity,
    /// An argument has the wrong value kind
    Type,
    /// A string tag does not match any recognized value
    Value,
    /// A numeric coordinate is outside its valid geographic range
    Range,
}

/// The error value a function returns in place of a result.
///
/// The host surfaces the message to the end user verbatim, so it is always
/// a complete sentence naming the violated rule and the valid inputs.
/// Validation order inside each function is fixed, which makes the message
/// deterministic even when several arguments are invalid at once.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalError {
    kind: ErrorKind,
    message: String,
}

impl EvalError {
    pub(crate) fn arity(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Arity,
            message: message.into(),
        }
    }

    pub(crate) fn bad_type(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Type,
            message: message.into(),
        }
    }

    pub(crate) fn bad_value(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Value,
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Range,
            message: message.into(),
        }
    }

    /// Which class of rule was violated
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The user-facing description, ready for display
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for EvalError {}
