//! Literal element
//!
//! A literal wraps an already-known value. It may start a pipeline (its
//! value feeds the next stage) but can never receive pipeline input, so
//! it is a source-only node.

use std::fmt;

use crate::value::Value;

/// A pipeline node wrapping a fixed, already-known value.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Value,
}

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Literal {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// A literal's value is known, so it never needs pipeline input.
    pub fn input_needed(&self) -> bool {
        false
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({})", self.value)
    }
}
