//! Pipeline AST
//!
//! The node model is a closed set of variants: the hole marker, literal
//! values, closures, partial calls, and the binary pipe chaining them.
//! Nodes are immutable after construction, combined with the `>>`
//! operator, consumed read-only by the validator and collector, and
//! discarded after a single build.
//!
//! Placement rules, rendered as per-node flags checked by the validator:
//! - `Hole` is valid at either end (as a destination it is the identity)
//! - `Literal` may only be a source
//! - `Closure` and `Call` may only be destinations

pub mod elements;
pub mod parameter;
pub mod signature;
pub mod snapshot;

use std::fmt;
use std::ops::Shr;

use crate::value::Value;
use elements::{Call, Closure, Literal, Pipe};

/// The marker rendered for an open pipeline slot.
pub(crate) const HOLE_MARK: &str = "·";

/// A pipeline AST node.
///
/// `Hole` is a unit variant, so the missing-value marker is inherently a
/// process-wide singleton; it never compares equal to a literal null.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The explicit "value not yet known" marker.
    Hole,
    Literal(Literal),
    Closure(Closure),
    Call(Call),
    Pipe(Pipe),
}

/// Flat tag identifying a node variant, used in snapshots and dispatch
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Hole,
    Literal,
    Closure,
    Call,
    Pipe,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Hole => "Hole",
            NodeKind::Literal => "Literal",
            NodeKind::Closure => "Closure",
            NodeKind::Call => "Call",
            NodeKind::Pipe => "Pipe",
        };
        write!(f, "{}", name)
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Hole => NodeKind::Hole,
            Node::Literal(_) => NodeKind::Literal,
            Node::Closure(_) => NodeKind::Closure,
            Node::Call(_) => NodeKind::Call,
            Node::Pipe(_) => NodeKind::Pipe,
        }
    }

    /// Whether this node may appear as a pipe's source. Closures and
    /// calls receive pipeline input, so they are destination-only.
    pub fn valid_as_source(&self) -> bool {
        !matches!(self, Node::Closure(_) | Node::Call(_))
    }

    /// Whether this node may appear as a pipe's destination. A fixed
    /// value cannot receive pipeline input, so literals are source-only.
    pub fn valid_as_destination(&self) -> bool {
        !matches!(self, Node::Literal(_))
    }

    /// Whether a pipeline rooted at this node still needs input to run.
    pub fn input_needed(&self) -> bool {
        match self {
            Node::Hole => true,
            Node::Literal(literal) => literal.input_needed(),
            Node::Closure(closure) => closure.input_needed(),
            Node::Call(call) => call.input_needed(),
            Node::Pipe(pipe) => pipe.input_needed(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Hole => write!(f, "hole({})", HOLE_MARK),
            Node::Literal(literal) => write!(f, "{}", literal),
            Node::Closure(closure) => write!(f, "{}", closure),
            Node::Call(call) => write!(f, "{}", call),
            Node::Pipe(pipe) => write!(f, "{}", pipe),
        }
    }
}

/// Normalization applied to the right-hand side of `>>`.
///
/// Plain values wrap into `Literal`; `Option::None` (the nil-like marker)
/// maps to `Hole`; nodes pass through unchanged.
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoNode for Value {
    fn into_node(self) -> Node {
        Node::Literal(Literal::new(self))
    }
}

impl<T: IntoNode> IntoNode for Option<T> {
    fn into_node(self) -> Node {
        match self {
            Some(inner) => inner.into_node(),
            None => Node::Hole,
        }
    }
}

macro_rules! into_node_via_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoNode for $ty {
                fn into_node(self) -> Node {
                    Node::Literal(Literal::new(self))
                }
            }
        )*
    };
}

into_node_via_value!(bool, i32, i64, f64, &str, String, Vec<Value>);

/// `source >> destination` is the single construction entry point for
/// pipes. The destination is normalized, and no validation happens here;
/// that is deferred to the validator pass.
impl<R: IntoNode> Shr<R> for Node {
    type Output = Node;

    fn shr(self, rhs: R) -> Node {
        Node::Pipe(Pipe::new(self, rhs.into_node()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parameter::Parameter;
    use crate::ast::signature::Signature;
    use crate::env::Environment;

    fn unary_closure() -> Node {
        let signature = Signature::new(vec![Parameter::required("x")]);
        Node::Closure(Closure::strict(|x| x, signature))
    }

    #[test]
    fn test_placement_flags() {
        assert!(Node::Hole.valid_as_source());
        assert!(Node::Hole.valid_as_destination());

        let literal = Node::Literal(Literal::new(1));
        assert!(literal.valid_as_source());
        assert!(!literal.valid_as_destination());

        let closure = unary_closure();
        assert!(!closure.valid_as_source());
        assert!(closure.valid_as_destination());

        let call = Node::Call(Call::new(
            Environment::new(),
            "f",
            vec![],
            Signature::new(vec![Parameter::required("x")]),
        ));
        assert!(!call.valid_as_source());
        assert!(call.valid_as_destination());
    }

    #[test]
    fn test_hole_display() {
        assert_eq!(Node::Hole.to_string(), "hole(·)");
    }

    #[test]
    fn test_hole_is_not_a_null_literal() {
        let null_literal = Node::Literal(Literal::new(Value::Null));
        assert_ne!(Node::Hole, null_literal);
        assert_eq!(Node::Hole, Node::Hole);
    }

    #[test]
    fn test_shr_builds_pipe() {
        let node = Node::Hole >> unary_closure();
        match node {
            Node::Pipe(pipe) => {
                assert_eq!(*pipe.source(), Node::Hole);
                assert_eq!(pipe.destination().kind(), NodeKind::Closure);
            }
            other => panic!("expected a pipe, got {:?}", other),
        }
    }

    #[test]
    fn test_shr_normalizes_raw_values() {
        let node = Node::Hole >> 42;
        match node {
            Node::Pipe(pipe) => {
                assert_eq!(*pipe.destination(), Node::Literal(Literal::new(42)));
            }
            other => panic!("expected a pipe, got {:?}", other),
        }
    }

    #[test]
    fn test_shr_normalizes_none_to_hole() {
        let node = Node::Hole >> Option::<Node>::None;
        match node {
            Node::Pipe(pipe) => assert_eq!(*pipe.destination(), Node::Hole),
            other => panic!("expected a pipe, got {:?}", other),
        }
    }

    #[test]
    fn test_shr_chains_left_associatively() {
        let node = (Node::Hole >> unary_closure()) >> unary_closure();
        match node {
            Node::Pipe(outer) => {
                assert_eq!(outer.source().kind(), NodeKind::Pipe);
                assert_eq!(outer.destination().kind(), NodeKind::Closure);
            }
            other => panic!("expected a pipe, got {:?}", other),
        }
    }

    #[test]
    fn test_input_needed_per_variant() {
        assert!(Node::Hole.input_needed());
        assert!(!Node::Literal(Literal::new(1)).input_needed());
        assert!(unary_closure().input_needed());
    }
}
