//! Node snapshots - a normalized, serializable view of a pipeline tree
//!
//! A snapshot captures per-node metadata (type, label, derived attributes,
//! children) in a format-agnostic shape, so serializers can focus on
//! presentation without reimplementing traversal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Node;

/// A snapshot of one pipeline node in a normalized, serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The node variant name (e.g. "Call", "Pipe")
    pub node_type: String,

    /// The node's display form
    pub label: String,

    /// Derived per-variant metadata
    pub attributes: HashMap<String, String>,

    /// Child nodes, in pipeline order
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        NodeSnapshot {
            node_type: node_type.into(),
            label: label.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: NodeSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Render this snapshot as a JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build the snapshot tree for a node and all of its descendants.
pub fn snapshot_node(node: &Node) -> NodeSnapshot {
    let base = NodeSnapshot::new(node.kind().to_string(), node.to_string());
    match node {
        Node::Hole => base,
        Node::Literal(literal) => base.with_attribute("value", literal.value().to_string()),
        Node::Closure(closure) => base
            .with_attribute("derived_definition", closure.definition())
            .with_attribute("derived_arity", closure.signature().arity().to_string())
            .with_attribute("reifiable", closure.reifiable().to_string())
            .with_attribute("strict", closure.is_strict().to_string()),
        Node::Call(call) => base
            .with_attribute("derived_definition", call.definition())
            .with_attribute("derived_arity", call.signature().arity().to_string())
            .with_attribute("arg_count", call.arguments().len().to_string())
            .with_attribute("reifiable", call.reifiable().to_string()),
        Node::Pipe(pipe) => base
            .with_child(snapshot_node(pipe.source()))
            .with_child(snapshot_node(pipe.destination())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::elements::{Argument, Call, Closure, Literal};
    use crate::ast::parameter::Parameter;
    use crate::ast::signature::Signature;
    use crate::env::Environment;

    #[test]
    fn test_snapshot_hole() {
        let snapshot = snapshot_node(&Node::Hole);
        assert_eq!(snapshot.node_type, "Hole");
        assert_eq!(snapshot.label, "hole(·)");
        assert!(snapshot.children.is_empty());
    }

    #[test]
    fn test_snapshot_literal_records_value() {
        let snapshot = snapshot_node(&Node::Literal(Literal::new(9)));
        assert_eq!(snapshot.node_type, "Literal");
        assert_eq!(snapshot.attributes.get("value").map(String::as_str), Some("9"));
    }

    #[test]
    fn test_snapshot_call_records_derivations() {
        let signature = Signature::new(vec![Parameter::required("a"), Parameter::required("b")]);
        let call = Call::new(
            Environment::new(),
            "f",
            vec![Argument::of(1)],
            signature,
        );
        let snapshot = snapshot_node(&Node::Call(call));

        assert_eq!(
            snapshot.attributes.get("derived_definition").map(String::as_str),
            Some("f(a, b)")
        );
        assert_eq!(snapshot.attributes.get("derived_arity").map(String::as_str), Some("2..2"));
        assert_eq!(snapshot.attributes.get("arg_count").map(String::as_str), Some("1"));
        assert_eq!(snapshot.attributes.get("reifiable").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_snapshot_pipe_recurses_in_pipeline_order() {
        let signature = Signature::new(vec![Parameter::required("x")]);
        let closure = Node::Closure(Closure::strict(|x| x, signature));
        let tree = crate::pipeline::input(1) >> closure;

        let snapshot = snapshot_node(&tree);
        assert_eq!(snapshot.node_type, "Pipe");
        assert_eq!(snapshot.children.len(), 2);
        assert_eq!(snapshot.children[0].node_type, "Literal");
        assert_eq!(snapshot.children[1].node_type, "Closure");
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let json = snapshot_node(&Node::Hole).to_json_string().unwrap();
        let parsed: NodeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot_node(&Node::Hole));
    }
}
