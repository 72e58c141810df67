//! Structural validation of pipeline trees
//!
//! Pre-order traversal, fail fast: a pipe's own placement rules are
//! checked before its children are visited, so the first violation
//! nearest the root is the one reported.

use crate::ast::elements::{Call, Closure, Literal, Pipe};
use crate::ast::Node;
use crate::error::PipelineError;

use super::visitor::Visitor;

/// Walks a pipeline tree enforcing placement and reifiability rules.
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Validator
    }

    /// Traverse the tree rooted at `node` and ensure structural validity.
    pub fn validate(&mut self, node: &Node) -> Result<(), PipelineError> {
        self.visit(node)
    }
}

impl Visitor for Validator {
    type Output = ();

    // Holes and literals are always valid in their allowed positions;
    // placement itself was already checked by the parent pipe visit.
    fn visit_hole(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }

    fn visit_literal(&mut self, _literal: &Literal) -> Result<(), PipelineError> {
        Ok(())
    }

    fn visit_closure(&mut self, closure: &Closure) -> Result<(), PipelineError> {
        if !closure.reifiable() {
            return Err(PipelineError::unreifiable(closure));
        }
        Ok(())
    }

    fn visit_call(&mut self, call: &Call) -> Result<(), PipelineError> {
        if !call.reifiable() {
            return Err(PipelineError::unreifiable(call));
        }
        Ok(())
    }

    fn visit_pipe(&mut self, pipe: &Pipe) -> Result<(), PipelineError> {
        let source = pipe.source();
        let destination = pipe.destination();

        if !source.valid_as_source() {
            return Err(PipelineError::invalid_source(source));
        }
        if !destination.valid_as_destination() {
            return Err(PipelineError::invalid_destination(destination));
        }

        self.visit(source)?;
        self.visit(destination)
    }
}
