//! Pipeline node elements
//!
//! One module per node variant; the closed `Node` enum tying them
//! together lives in the parent module.

pub mod call;
pub mod closure;
pub mod literal;
pub mod pipe;

pub use call::{Argument, Call};
pub use closure::{Closure, ClosureFn};
pub use literal::Literal;
pub use pipe::Pipe;
