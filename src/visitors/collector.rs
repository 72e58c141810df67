//! Compilation of validated trees into transformation chains
//!
//! The collector walks a tree pre-order (source before destination at
//! every pipe) and emits one unary transform per non-pipe node. The
//! resulting sequence composes right-to-left into a single callable.
//!
//! Collectors are stateful and should be used once.

use std::rc::Rc;

use crate::ast::elements::{Call, Closure, Literal, Pipe};
use crate::ast::Node;
use crate::error::PipelineError;
use crate::value::Value;

use super::visitor::Visitor;

/// A single pipeline stage: one unary transformation over values.
pub type Transform = Rc<dyn Fn(Value) -> Value>;

/// Walks a validated tree and collects its stages in pipeline order.
#[derive(Default)]
pub struct Collector {
    collected: Vec<Transform>,
}

impl Collector {
    pub fn new() -> Self {
        Collector {
            collected: Vec::new(),
        }
    }

    /// Traverse the tree rooted at `node`, returning the ordered list of
    /// stage transforms.
    pub fn collect(mut self, node: &Node) -> Result<Vec<Transform>, PipelineError> {
        self.visit(node)?;
        Ok(self.collected)
    }
}

impl Visitor for Collector {
    type Output = ();

    /// A hole is the identity stage.
    fn visit_hole(&mut self) -> Result<(), PipelineError> {
        self.collected.push(Rc::new(|x| x));
        Ok(())
    }

    /// A literal ignores its input and yields its value.
    fn visit_literal(&mut self, literal: &Literal) -> Result<(), PipelineError> {
        let value = literal.value().clone();
        self.collected.push(Rc::new(move |_input| value.clone()));
        Ok(())
    }

    /// A closure is its own transform.
    fn visit_closure(&mut self, closure: &Closure) -> Result<(), PipelineError> {
        self.collected.push(closure.func());
        Ok(())
    }

    /// A call resolves its name in the environment now; the transform
    /// inserts pipeline input as the leftmost argument, followed by the
    /// bound arguments in their original order.
    fn visit_call(&mut self, call: &Call) -> Result<(), PipelineError> {
        let entry = call
            .environment()
            .lookup(call.name())
            .ok_or_else(|| PipelineError::unknown_call(call.name()))?;
        let bound = call
            .argument_values()
            .ok_or_else(|| PipelineError::unreifiable(call))?;
        let func = entry.func();

        self.collected.push(Rc::new(move |input| {
            let mut argv = Vec::with_capacity(bound.len() + 1);
            argv.push(input);
            argv.extend(bound.iter().cloned());
            func(&argv)
        }));
        Ok(())
    }

    /// A pipe collects nothing itself; its children are visited in
    /// pipeline order.
    fn visit_pipe(&mut self, pipe: &Pipe) -> Result<(), PipelineError> {
        self.visit(pipe.source())?;
        self.visit(pipe.destination())
    }
}
