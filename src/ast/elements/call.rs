//! Call element
//!
//! Represents a named call with already-bound arguments, resolvable in a
//! capturing environment. A call is *reifiable* when exactly one required
//! slot (the leftmost) remains open for the pipeline to fill. Calls are
//! destination-only nodes: the pipeline supplies their open slot, so they
//! can never head a pipeline themselves.

use std::fmt;

use crate::ast::signature::Signature;
use crate::env::Environment;
use crate::value::Value;

/// An argument bound into a call: either a plain value or a nested
/// partial call. The latter only arises from hand-built trees; the
/// capture boundary rejects it with a misplaced-partial error.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Value(Value),
    Partial(Call),
}

impl Argument {
    pub fn is_partial(&self) -> bool {
        matches!(self, Argument::Partial(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Argument::Value(value) => Some(value),
            Argument::Partial(_) => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Value(value) => write!(f, "{}", value),
            Argument::Partial(call) => write!(f, "{}", call),
        }
    }
}

impl Argument {
    /// Wrap any value-convertible type as a plain-value argument.
    pub fn of(value: impl Into<Value>) -> Self {
        Argument::Value(value.into())
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

impl From<Call> for Argument {
    fn from(call: Call) -> Self {
        Argument::Partial(call)
    }
}

/// A pipeline node representing a call to `name` with bound arguments.
///
/// The environment handle is shared, not owned; the call only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    env: Environment,
    name: String,
    arguments: Vec<Argument>,
    signature: Signature,
}

impl Call {
    pub fn new(
        env: Environment,
        name: impl Into<String>,
        arguments: Vec<Argument>,
        signature: Signature,
    ) -> Self {
        Call {
            env,
            name: name.into(),
            arguments,
            signature,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The bound arguments as plain values, or `None` if any argument is
    /// itself a partial call.
    pub fn argument_values(&self) -> Option<Vec<Value>> {
        self.arguments
            .iter()
            .map(|arg| arg.as_value().cloned())
            .collect()
    }

    /// Whether this call can stand in for a pipeline stage: no argument
    /// may itself be a partial call, and enough arguments must be bound
    /// that only the leftmost required slot remains open.
    pub fn reifiable(&self) -> bool {
        !self.contains_partial() && self.fits_pipeline_arity()
    }

    pub fn input_needed(&self) -> bool {
        self.reifiable()
    }

    fn contains_partial(&self) -> bool {
        // A partial call as an argument would mean filling a hole from
        // the pipeline mid-argument-list, which is not supported.
        self.arguments.iter().any(Argument::is_partial)
    }

    fn fits_pipeline_arity(&self) -> bool {
        let arity = self.signature.arity();
        if arity.is_empty() {
            return false;
        }

        // Exactly one required slot, the leftmost, may remain open.
        let nargs = self.arguments.len();
        let minimum_for_pipeline = arity.min.saturating_sub(1);
        nargs >= minimum_for_pipeline && arity.max.map_or(true, |max| nargs < max)
    }

    /// The full formal signature, used when the call is not reifiable.
    pub fn definition(&self) -> String {
        format!("{}({})", self.name, self.signature.parameter_list())
    }

    /// The signature with the leftmost slot rendered as a hole, used when
    /// the call is reifiable.
    pub fn representation(&self) -> String {
        format!("{}({})", self.name, self.signature.parameter_list_with_hole())
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reifiable() {
            write!(f, "{}", self.representation())
        } else {
            write!(f, "{}", self.definition())
        }
    }
}
