//! Function environments and the capture boundary
//!
//! The `Environment` registry stands in for the original caller's scope:
//! callers register named functions together with their parameter
//! signatures, and `Environment::call` applies the capture-boundary
//! decision for each attempted call — reject partial-call arguments,
//! produce a partial `Call` node when the call is reifiable, or evaluate
//! it eagerly when it is already saturated.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::elements::{Argument, Call};
use crate::ast::signature::Signature;
use crate::ast::Node;
use crate::error::{reject_partials, PipelineError};
use crate::value::Value;

/// A registered native function: takes the full argument list, returns a
/// value.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Value>;

/// A registered function together with its declared signature.
#[derive(Clone)]
pub struct FunctionEntry {
    signature: Signature,
    func: NativeFn,
}

impl FunctionEntry {
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn func(&self) -> NativeFn {
        Rc::clone(&self.func)
    }
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("signature", &self.signature)
            .field("func", &"<fn>")
            .finish()
    }
}

/// The outcome of dispatching a call at the capture boundary.
#[derive(Debug)]
pub enum Dispatch {
    /// The call was reifiable; a pipeline node was produced.
    Partial(Node),
    /// The call was saturated and has been evaluated eagerly.
    Evaluated(Value),
}

impl Dispatch {
    pub fn into_node(self) -> Option<Node> {
        match self {
            Dispatch::Partial(node) => Some(node),
            Dispatch::Evaluated(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Dispatch::Evaluated(value) => Some(value),
            Dispatch::Partial(_) => None,
        }
    }
}

/// A shared registry of named functions.
///
/// Handles are cheap clones of the same underlying registry; equality is
/// handle identity. The engine is single-threaded, so interior
/// mutability via `RefCell` is sufficient.
#[derive(Clone)]
pub struct Environment {
    functions: Rc<RefCell<HashMap<String, FunctionEntry>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            functions: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Register `func` under `name` with its declared signature.
    /// Re-registering a name replaces the previous entry.
    pub fn register<F>(&self, name: impl Into<String>, signature: Signature, func: F)
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        self.functions.borrow_mut().insert(
            name.into(),
            FunctionEntry {
                signature,
                func: Rc::new(func),
            },
        );
    }

    /// Look up a registered function by name.
    pub fn lookup(&self, name: &str) -> Option<FunctionEntry> {
        self.functions.borrow().get(name).cloned()
    }

    /// Dispatch an attempted call.
    ///
    /// Partial-call arguments are rejected first (they indicate a partial
    /// used as a plain argument rather than as a pipeline stage), then the
    /// name is resolved. A reifiable call becomes a pipeline node; a
    /// saturated one is evaluated on the spot.
    pub fn call(
        &self,
        name: &str,
        arguments: Vec<Argument>,
    ) -> Result<Dispatch, PipelineError> {
        reject_partials(name, &arguments)?;

        let entry = self
            .lookup(name)
            .ok_or_else(|| PipelineError::unknown_call(name))?;

        let call = Call::new(self.clone(), name, arguments, entry.signature().clone());
        if call.reifiable() {
            return Ok(Dispatch::Partial(Node::Call(call)));
        }

        let values = call
            .argument_values()
            .ok_or_else(|| PipelineError::misplaced_partial(name))?;
        Ok(Dispatch::Evaluated(entry.func()(&values)))
    }

    /// Handle identity: do both handles share one registry?
    pub fn ptr_eq(a: &Environment, b: &Environment) -> bool {
        Rc::ptr_eq(&a.functions, &b.functions)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Environment::ptr_eq(self, other)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.functions.borrow().keys().cloned().collect();
        f.debug_struct("Environment")
            .field("functions", &names)
            .finish()
    }
}
