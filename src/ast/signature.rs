//! Parameter signatures and the arity-range calculus
//!
//! A `Signature` owns an ordered parameter list and derives the arity
//! range that decides whether a call or closure can serve as a pipeline
//! stage. Because of optional and keyword parameters the real arity of a
//! callable is a range, and a rest parameter makes the upper bound
//! conceptually infinite:
//!
//! 1. Lower bound: (# of required positionals) + (1 if any keyword
//!    parameter is required)
//! 2. Upper bound: (# of non-rest positionals) + (1 if any keyword
//!    parameter exists), or unbounded if a rest parameter exists.
//!
//! N.B. the keyword-rest kind does not lift the upper bound to infinity;
//! it only contributes to the "any keyword exists" +1.

use once_cell::unsync::OnceCell;
use std::fmt;

use super::parameter::{Parameter, ParameterKind};
use super::HOLE_MARK;

/// The inclusive-minimum, possibly-unbounded-maximum argument count a
/// callable accepts. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    /// Whether `n` arguments fall within this arity range.
    pub fn contains(&self, n: usize) -> bool {
        n >= self.min && self.max.map_or(true, |max| n <= max)
    }

    /// An arity range nothing satisfies (`max < min`). Never produced by
    /// the calculus above, but callers treat it as non-reifiable.
    pub fn is_empty(&self) -> bool {
        self.max.map_or(false, |max| max < self.min)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..∞", self.min),
        }
    }
}

/// An ordered formal-parameter list with a memoized derived arity.
///
/// Signatures are supplied by the capture boundary and are not validated
/// here; a malformed list (duplicate names and the like) is the
/// supplier's responsibility.
#[derive(Debug, Clone)]
pub struct Signature {
    parameters: Vec<Parameter>,
    arity: OnceCell<Arity>,
}

impl Signature {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Signature {
            parameters,
            arity: OnceCell::new(),
        }
    }

    /// A signature with no parameters at all.
    pub fn empty() -> Self {
        Signature::new(Vec::new())
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The derived arity range, computed at most once per signature.
    pub fn arity(&self) -> Arity {
        *self.arity.get_or_init(|| self.compute_arity())
    }

    fn compute_arity(&self) -> Arity {
        let mut min = self.count_kind(ParameterKind::Required);
        if self.has_required_keyword() {
            min += 1;
        }

        let max = if self.has_rest() {
            None
        } else {
            let mut max = self
                .parameters
                .iter()
                .filter(|p| p.is_positional() && p.kind() != ParameterKind::Rest)
                .count();
            if self.has_any_keyword() {
                max += 1;
            }
            Some(max)
        };

        Arity { min, max }
    }

    fn count_kind(&self, kind: ParameterKind) -> usize {
        self.parameters.iter().filter(|p| p.kind() == kind).count()
    }

    fn has_kind(&self, kind: ParameterKind) -> bool {
        self.parameters.iter().any(|p| p.kind() == kind)
    }

    pub fn has_required(&self) -> bool {
        self.has_kind(ParameterKind::Required)
    }

    pub fn has_optional(&self) -> bool {
        self.has_kind(ParameterKind::Optional)
    }

    pub fn has_rest(&self) -> bool {
        self.has_kind(ParameterKind::Rest)
    }

    pub fn has_keyword(&self) -> bool {
        self.has_kind(ParameterKind::Keyword)
    }

    pub fn has_required_keyword(&self) -> bool {
        self.has_kind(ParameterKind::RequiredKeyword)
    }

    pub fn has_keyword_rest(&self) -> bool {
        self.has_kind(ParameterKind::KeywordRest)
    }

    pub fn has_block(&self) -> bool {
        self.has_kind(ParameterKind::Block)
    }

    /// Any parameter of the keyword family.
    pub fn has_any_keyword(&self) -> bool {
        self.parameters.iter().any(Parameter::is_keyword)
    }

    /// The full parameter list, comma separated.
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(Parameter::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The parameter list with the leftmost slot rendered as the hole
    /// marker, used for reifiable representations.
    pub fn parameter_list_with_hole(&self) -> String {
        let mut rendered = vec![HOLE_MARK.to_string()];
        rendered.extend(self.parameters.iter().skip(1).map(Parameter::to_string));
        rendered.join(", ")
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
    }
}
