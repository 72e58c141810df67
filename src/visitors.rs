//! Visitor passes over pipeline trees
//!
//! The dispatch mechanism lives in `visitor`; the two consumers are the
//! structural `validator` and the compiling `collector`. Adding a node
//! variant means adding one dispatch arm and at most two handlers, not
//! rewriting traversal logic.

pub mod collector;
pub mod validator;
pub mod visitor;

pub use collector::{Collector, Transform};
pub use validator::Validator;
pub use visitor::Visitor;
