//! Closure element
//!
//! Wraps a caller-supplied function together with its declared parameter
//! signature and calling convention. As a destination, pipeline input is
//! passed straight to the function and its result forwarded on. A bare
//! closure cannot start a pipeline (only a literal wrapping one could),
//! so it is a destination-only node.

use std::fmt;
use std::rc::Rc;

use crate::ast::signature::Signature;
use crate::value::Value;

/// The function type a closure node wraps. Also the unary-transform type
/// the collector emits.
pub type ClosureFn = Rc<dyn Fn(Value) -> Value>;

/// A pipeline node wrapping a callable with a known parameter list.
///
/// `strict` distinguishes a fixed-arity (lambda-like) calling convention
/// from a lenient (proc-like) one; it affects only the rendered form, the
/// leniency of the parameter kinds themselves is the signature supplier's
/// concern.
#[derive(Clone)]
pub struct Closure {
    func: ClosureFn,
    signature: Signature,
    strict: bool,
}

impl Closure {
    pub fn new(func: ClosureFn, signature: Signature, strict: bool) -> Self {
        Closure {
            func,
            signature,
            strict,
        }
    }

    /// A strict closure from any unary-compatible function.
    pub fn strict(func: impl Fn(Value) -> Value + 'static, signature: Signature) -> Self {
        Closure::new(Rc::new(func), signature, true)
    }

    /// A lenient closure from any unary-compatible function.
    pub fn lenient(func: impl Fn(Value) -> Value + 'static, signature: Signature) -> Self {
        Closure::new(Rc::new(func), signature, false)
    }

    pub fn func(&self) -> ClosureFn {
        Rc::clone(&self.func)
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether this closure can stand in for a pipeline stage: exactly one
    /// required parameter, or zero required and at least one acceptable
    /// argument. A rest-only signature (unbounded max) is reifiable.
    pub fn reifiable(&self) -> bool {
        let arity = self.signature.arity();
        arity.min == 1 || (arity.min == 0 && arity.max.map_or(true, |max| max > 0))
    }

    pub fn input_needed(&self) -> bool {
        self.reifiable()
    }

    /// The full formal signature, used when the closure is not reifiable.
    pub fn definition(&self) -> String {
        self.derive_with(self.signature.parameter_list())
    }

    /// The signature with the leftmost slot rendered as a hole, used when
    /// the closure is reifiable.
    pub fn representation(&self) -> String {
        self.derive_with(self.signature.parameter_list_with_hole())
    }

    fn derive_with(&self, param_list: String) -> String {
        match (self.strict, self.signature.parameters().is_empty()) {
            (true, true) => "|| { ... }".to_string(),
            (true, false) => format!("|{}| {{ ... }}", param_list),
            (false, true) => "proc { ... }".to_string(),
            (false, false) => format!("proc |{}| {{ ... }}", param_list),
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reifiable() {
            write!(f, "{}", self.representation())
        } else {
            write!(f, "{}", self.definition())
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("func", &"<fn>")
            .field("signature", &self.signature)
            .field("strict", &self.strict)
            .finish()
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        // Function identity, not extensional equality
        Rc::ptr_eq(&self.func, &other.func)
            && self.signature == other.signature
            && self.strict == other.strict
    }
}
