//! Pipeline building and composition
//!
//! `build` runs the full flow over a finished tree: validate, collect the
//! stage transforms, compose them right-to-left into one callable, and
//! either invoke it immediately (when the tree's source needs no input)
//! or hand the callable back for later invocation.

use std::fmt;
use std::rc::Rc;

use crate::ast::elements::Literal;
use crate::ast::Node;
use crate::error::PipelineError;
use crate::value::Value;
use crate::visitors::collector::{Collector, Transform};
use crate::visitors::validator::Validator;

/// Wrap a known value as a pipeline input stage.
///
/// A null value maps to the hole marker, mirroring an input that is not
/// yet known.
pub fn input(value: impl Into<Value>) -> Node {
    let value = value.into();
    if value.is_null() {
        return Node::Hole;
    }
    Node::Literal(Literal::new(value))
}

/// The missing-value input marker: the pipeline will need a concrete
/// input when invoked.
pub fn input_hole() -> Node {
    Node::Hole
}

/// The result of building a pipeline.
pub enum Built {
    /// The tree's input was already known; the pipeline ran once and this
    /// is its final value.
    Value(Value),
    /// The tree needs input; an unapplied unary callable is returned for
    /// later invocation.
    Transform(Transform),
}

impl Built {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Built::Value(value) => Some(value),
            Built::Transform(_) => None,
        }
    }

    pub fn into_transform(self) -> Option<Transform> {
        match self {
            Built::Transform(transform) => Some(transform),
            Built::Value(_) => None,
        }
    }
}

impl fmt::Debug for Built {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Built::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Built::Transform(_) => f.debug_tuple("Transform").field(&"<fn>").finish(),
        }
    }
}

/// Compose an ordered stage list into one transform, first stage
/// innermost: `compose([f, g])` is `|x| g(f(x))`.
pub fn compose(transforms: Vec<Transform>) -> Transform {
    transforms
        .into_iter()
        .reduce(|source, destination| {
            let composed: Transform = Rc::new(move |x| destination(source(x)));
            composed
        })
        .unwrap_or_else(|| Rc::new(|x| x))
}

/// Validate and compile the tree rooted at `node`.
///
/// Returns the pipeline's final value when the root needs no input, or
/// the composed unary transform when it does.
pub fn build(node: &Node) -> Result<Built, PipelineError> {
    Validator::new().validate(node)?;
    let transforms = Collector::new().collect(node)?;
    let pipeline = compose(transforms);

    if node.input_needed() {
        Ok(Built::Transform(pipeline))
    } else {
        Ok(Built::Value(pipeline(Value::Null)))
    }
}
