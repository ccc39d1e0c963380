//! The callable contract between a host evaluator and its custom functions

use std::collections::HashMap;

mod errors;
mod value;

pub use errors::{ErrorKind, EvalError};
pub use value::Value;

/// A function invocable from the host's expression language.
///
/// The host hands every function the same shape of input: an opaque
/// evaluation context and an ordered list of dynamically-typed arguments.
/// Everything else (the name it is registered under, help text, the
/// declared signature) is static metadata the host reads for
/// introspection, never executes.
pub trait Function {
    /// Invoke the function on the given argument list.
    ///
    /// # Errors
    /// Every violated argument rule is reported in-line as an [`EvalError`]
    /// carrying a displayable message. Nothing unwinds across this
    /// boundary and no partial results are produced.
    fn call(&self, bindings: &Bindings, args: &[Value]) -> Result<Value, EvalError>;

    /// The name the host registers and invokes this function by.
    fn name(&self) -> &'static str;

    /// One-line help text with a usage sample.
    fn description(&self) -> &'static str;

    /// The parameter-signature string shown in help.
    fn params(&self) -> &'static str;

    /// The declared return type: `"string"`, `"number"`, ...
    fn returns(&self) -> &'static str;
}

/// The evaluation context the host passes to every call.
///
/// It keeps the call signature uniform across the host's function table;
/// the functions in this crate never read it.
#[derive(Debug, Default)]
pub struct Bindings(HashMap<String, Value>);

impl Bindings {
    /// An empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a named value for the functions that do use the context
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let _ = self.0.insert(name.into(), value);
    }

    /// Look up a named value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}
