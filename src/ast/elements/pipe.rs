//! Pipe element
//!
//! The binary node chaining a source stage's output into a destination
//! stage's leftmost input. A pipe exclusively owns both children; trees
//! never share nodes.

use std::fmt;

use crate::ast::Node;

/// A source-to-destination chaining of two pipeline nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    source: Box<Node>,
    destination: Box<Node>,
}

impl Pipe {
    pub fn new(source: Node, destination: Node) -> Self {
        Pipe {
            source: Box::new(source),
            destination: Box::new(destination),
        }
    }

    pub fn source(&self) -> &Node {
        &self.source
    }

    pub fn destination(&self) -> &Node {
        &self.destination
    }

    /// A pipe needs input exactly when its source does.
    pub fn input_needed(&self) -> bool {
        self.source.input_needed()
    }
}

impl fmt::Display for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} >> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::elements::Literal;

    #[test]
    fn test_input_needed_follows_source() {
        let needs = Pipe::new(Node::Hole, Node::Hole);
        assert!(needs.input_needed());

        let ready = Pipe::new(Node::Literal(Literal::new(1)), Node::Hole);
        assert!(!ready.input_needed());
    }

    #[test]
    fn test_display_chains_children() {
        let pipe = Pipe::new(Node::Literal(Literal::new(1)), Node::Hole);
        assert_eq!(pipe.to_string(), "Literal(1) >> hole(·)");
    }

    #[test]
    fn test_structural_equality() {
        let a = Pipe::new(Node::Hole, Node::Literal(Literal::new(2)));
        let b = Pipe::new(Node::Hole, Node::Literal(Literal::new(2)));
        assert_eq!(a, b);
    }
}
