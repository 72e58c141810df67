//! # flowpipe
//!
//! A builder and compiler for partial-application data pipelines.
//!
//! A pipeline is described as a tree of stages chained with the `>>`
//! operator: literal inputs, an explicit hole marker for not-yet-known
//! input, closures, and partial calls whose leftmost open argument is
//! filled by the previous stage's output. Building the tree validates its
//! structure and compiles it into a single composed unary transformation,
//! which is invoked immediately when the input is already known.
//!
//! ```ignore
//! use flowpipe::{build, input, Built};
//!
//! let tree = input(123) >> double_node;          // double(·) stage
//! match build(&tree)? {
//!     Built::Value(v) => println!("ran to {}", v),
//!     Built::Transform(f) => drop(f(some_input)),
//! }
//! ```

pub mod ast;
pub mod env;
pub mod error;
pub mod pipeline;
pub mod value;
pub mod visitors;

pub use ast::elements::{Argument, Call, Closure, ClosureFn, Literal, Pipe};
pub use ast::parameter::{Parameter, ParameterKind};
pub use ast::signature::{Arity, Signature};
pub use ast::snapshot::{snapshot_node, NodeSnapshot};
pub use ast::{IntoNode, Node, NodeKind};
pub use env::{Dispatch, Environment, FunctionEntry, NativeFn};
pub use error::{reject_partials, PipelineError};
pub use pipeline::{build, compose, input, input_hole, Built};
pub use value::Value;
pub use visitors::{Collector, Transform, Validator, Visitor};
