//! Error types for pipeline construction
//!
//! All structural problems surface as a `PipelineError`. Validation either
//! fully succeeds or fails with the first error found nearest the root;
//! there is no partial recovery.

use std::fmt;

use crate::ast::elements::{Argument, Literal};
use crate::ast::{Node, NodeKind};

/// Errors raised while building, validating, or compiling a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// A node structurally disallowed as a pipeline head appeared as a
    /// pipe's source.
    InvalidSource { message: String },
    /// A node structurally disallowed as a pipeline tail appeared as a
    /// pipe's destination.
    InvalidDestination { message: String },
    /// A call or closure cannot leave exactly one open slot for pipeline
    /// input.
    UnreifiableNode { message: String },
    /// A partial call was used as a plain argument instead of as a
    /// pipeline stage.
    MisplacedPartial { message: String },
    /// The named function is not registered in the environment.
    UnknownCall { name: String },
    /// The visitor dispatch found no handler for a node kind. Indicates a
    /// missing handler registration, not a user error.
    UnvisitableNode { kind: NodeKind },
}

impl PipelineError {
    /// Build an `InvalidSource` error for the offending node, with a
    /// kind-specific message.
    pub fn invalid_source(node: &Node) -> Self {
        let message = match node {
            Node::Call(_) => format!(
                "An incomplete call is a valid right-hand side of a pipeline but not \
                 a valid left-hand side ({} >> ... is invalid)",
                node
            ),
            _ => format!(
                "{} is unexpected on the left-hand side of a pipeline \
                 ({} >> ... is unexpected)",
                node.kind(),
                node
            ),
        };
        PipelineError::InvalidSource { message }
    }

    /// Build an `InvalidDestination` error for the offending node, with a
    /// kind-specific message.
    pub fn invalid_destination(node: &Node) -> Self {
        let message = match node {
            Node::Literal(literal) => literal_destination_message(literal, node),
            _ => format!(
                "{} is unexpected on the right-hand side of a pipeline \
                 (... >> {} is unexpected)",
                node.kind(),
                node
            ),
        };
        PipelineError::InvalidDestination { message }
    }

    /// Build an `UnreifiableNode` error naming the node's display form.
    pub fn unreifiable(display: impl fmt::Display) -> Self {
        PipelineError::UnreifiableNode {
            message: format!("Cannot reify {}", display),
        }
    }

    /// Build a `MisplacedPartial` error for a partial call passed as an
    /// argument to `referenced_name`.
    pub fn misplaced_partial(referenced_name: &str) -> Self {
        PipelineError::MisplacedPartial {
            message: format!(
                "Found a partial call as an argument (specifically to `{}`), this is \
                 likely programmer error. All non-pipeline calls should not be missing \
                 any arguments.",
                referenced_name
            ),
        }
    }

    /// Build an `UnknownCall` error for an unregistered function name.
    pub fn unknown_call(name: &str) -> Self {
        PipelineError::UnknownCall {
            name: name.to_string(),
        }
    }

    /// Build an `UnvisitableNode` error for a node kind no handler accepted.
    pub fn unvisitable(kind: NodeKind) -> Self {
        PipelineError::UnvisitableNode { kind }
    }
}

fn literal_destination_message(literal: &Literal, node: &Node) -> String {
    format!(
        "{} cannot be the right-hand side of a pipeline (... >> {} is invalid)",
        literal.value(),
        node
    )
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InvalidSource { message }
            | PipelineError::InvalidDestination { message }
            | PipelineError::UnreifiableNode { message }
            | PipelineError::MisplacedPartial { message } => write!(f, "{}", message),
            PipelineError::UnknownCall { name } => {
                write!(f, "No function named `{}` is registered", name)
            }
            PipelineError::UnvisitableNode { kind } => {
                write!(f, "Unable to visit {} node", kind)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// Fail if and only if any of `args` is a partial call.
///
/// `referenced_name` names the containing scope (the function or closure
/// the arguments were passed to) and appears in the error message.
pub fn reject_partials(referenced_name: &str, args: &[Argument]) -> Result<(), PipelineError> {
    if args.iter().any(Argument::is_partial) {
        return Err(PipelineError::misplaced_partial(referenced_name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::elements::Literal;
    use crate::value::Value;

    #[test]
    fn test_invalid_destination_names_literal_value() {
        let node = Node::Literal(Literal::new(Value::from(42)));
        let err = PipelineError::invalid_destination(&node);
        match err {
            PipelineError::InvalidDestination { message } => {
                assert!(message.contains("42 cannot be the right-hand side"));
            }
            other => panic!("expected InvalidDestination, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_source_generic_message_names_kind() {
        let node = Node::Literal(Literal::new(Value::from("x")));
        let err = PipelineError::invalid_source(&node);
        match err {
            PipelineError::InvalidSource { message } => {
                assert!(message.starts_with("Literal is unexpected"));
            }
            other => panic!("expected InvalidSource, got {:?}", other),
        }
    }

    #[test]
    fn test_reject_partials_accepts_plain_values() {
        let args = vec![Argument::from(Value::from(1)), Argument::from(Value::from(2))];
        assert!(reject_partials("f", &args).is_ok());
    }

    #[test]
    fn test_unvisitable_display() {
        let err = PipelineError::unvisitable(NodeKind::Pipe);
        assert_eq!(err.to_string(), "Unable to visit Pipe node");
    }
}
