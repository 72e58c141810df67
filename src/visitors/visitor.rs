//! Visitor dispatch over the closed node set
//!
//! `visit` dispatches on the node's variant. Every per-variant method
//! defaults to the base fallback `visit_other`, and `visit_other` itself
//! defaults to an unvisitable-node error. The fallback chain is therefore
//! variant handler → base handler → fatal dispatch error: a visitor that
//! overrides only `visit_other` still processes every variant, and a
//! visitor missing a handler fails with a dispatch error distinct from
//! any domain error.

use crate::ast::elements::{Call, Closure, Literal, Pipe};
use crate::ast::{Node, NodeKind};
use crate::error::PipelineError;

/// Double dispatch over pipeline nodes.
///
/// `visit` performs the variant match and is not meant to be overridden;
/// implement the per-variant handlers (or just `visit_other`) instead.
pub trait Visitor {
    type Output;

    fn visit(&mut self, node: &Node) -> Result<Self::Output, PipelineError> {
        match node {
            Node::Hole => self.visit_hole(),
            Node::Literal(literal) => self.visit_literal(literal),
            Node::Closure(closure) => self.visit_closure(closure),
            Node::Call(call) => self.visit_call(call),
            Node::Pipe(pipe) => self.visit_pipe(pipe),
        }
    }

    fn visit_hole(&mut self) -> Result<Self::Output, PipelineError> {
        self.visit_other(NodeKind::Hole)
    }

    fn visit_literal(&mut self, _literal: &Literal) -> Result<Self::Output, PipelineError> {
        self.visit_other(NodeKind::Literal)
    }

    fn visit_closure(&mut self, _closure: &Closure) -> Result<Self::Output, PipelineError> {
        self.visit_other(NodeKind::Closure)
    }

    fn visit_call(&mut self, _call: &Call) -> Result<Self::Output, PipelineError> {
        self.visit_other(NodeKind::Call)
    }

    fn visit_pipe(&mut self, _pipe: &Pipe) -> Result<Self::Output, PipelineError> {
        self.visit_other(NodeKind::Pipe)
    }

    /// Base fallback for any variant without a dedicated handler.
    fn visit_other(&mut self, kind: NodeKind) -> Result<Self::Output, PipelineError> {
        Err(PipelineError::unvisitable(kind))
    }
}
