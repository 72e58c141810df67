//! Formal parameter model
//!
//! A parameter is a kind plus an optional name. The seven kinds cover
//! required/optional positionals, rest parameters, the keyword family,
//! and block parameters. Parameters are immutable once constructed and
//! only exist inside a `Signature`'s ordered list.

use std::fmt;

/// The kind of a formal parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// A required positional parameter.
    Required,
    /// An optional positional parameter (has a default).
    Optional,
    /// A rest parameter absorbing any number of extra positionals.
    Rest,
    /// An optional keyword parameter.
    Keyword,
    /// A required keyword parameter.
    RequiredKeyword,
    /// A keyword-rest parameter absorbing extra keywords.
    KeywordRest,
    /// A block parameter.
    Block,
}

impl ParameterKind {
    /// Required, optional, and rest parameters are positional.
    pub fn is_positional(self) -> bool {
        matches!(
            self,
            ParameterKind::Required | ParameterKind::Optional | ParameterKind::Rest
        )
    }

    /// Keyword, required-keyword, and keyword-rest parameters are keywords.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            ParameterKind::Keyword | ParameterKind::RequiredKeyword | ParameterKind::KeywordRest
        )
    }
}

/// A single formal parameter: a kind and an optional name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    kind: ParameterKind,
    name: Option<String>,
}

impl Parameter {
    pub fn new(kind: ParameterKind, name: impl Into<String>) -> Self {
        Parameter {
            kind,
            name: Some(name.into()),
        }
    }

    /// A parameter whose name is unknown (signature suppliers may not
    /// always have one).
    pub fn anonymous(kind: ParameterKind) -> Self {
        Parameter { kind, name: None }
    }

    pub fn required(name: impl Into<String>) -> Self {
        Parameter::new(ParameterKind::Required, name)
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Parameter::new(ParameterKind::Optional, name)
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Parameter::new(ParameterKind::Rest, name)
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        Parameter::new(ParameterKind::Keyword, name)
    }

    pub fn required_keyword(name: impl Into<String>) -> Self {
        Parameter::new(ParameterKind::RequiredKeyword, name)
    }

    pub fn keyword_rest(name: impl Into<String>) -> Self {
        Parameter::new(ParameterKind::KeywordRest, name)
    }

    pub fn block(name: impl Into<String>) -> Self {
        Parameter::new(ParameterKind::Block, name)
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// The parameter's name, empty when anonymous.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn is_positional(&self) -> bool {
        self.kind.is_positional()
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self.kind {
            ParameterKind::Required => write!(f, "{}", name),
            ParameterKind::Optional => write!(f, "{} = <value>", name),
            ParameterKind::Rest => write!(f, "*{}", name),
            ParameterKind::Keyword => write!(f, "{}: <value>", name),
            ParameterKind::RequiredKeyword => write!(f, "{}:", name),
            ParameterKind::KeywordRest => write!(f, "**{}", name),
            ParameterKind::Block => write!(f, "&{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        assert_eq!(Parameter::required("x").to_string(), "x");
        assert_eq!(Parameter::optional("y").to_string(), "y = <value>");
        assert_eq!(Parameter::rest("args").to_string(), "*args");
        assert_eq!(Parameter::keyword("k").to_string(), "k: <value>");
        assert_eq!(Parameter::required_keyword("k").to_string(), "k:");
        assert_eq!(Parameter::keyword_rest("kw").to_string(), "**kw");
        assert_eq!(Parameter::block("b").to_string(), "&b");
    }

    #[test]
    fn test_positional_classification() {
        assert!(Parameter::required("x").is_positional());
        assert!(Parameter::optional("x").is_positional());
        assert!(Parameter::rest("x").is_positional());
        assert!(!Parameter::keyword("x").is_positional());
        assert!(!Parameter::block("x").is_positional());
    }

    #[test]
    fn test_keyword_classification() {
        assert!(Parameter::keyword("x").is_keyword());
        assert!(Parameter::required_keyword("x").is_keyword());
        assert!(Parameter::keyword_rest("x").is_keyword());
        assert!(!Parameter::rest("x").is_keyword());
    }

    #[test]
    fn test_anonymous_parameter_has_empty_name() {
        let param = Parameter::anonymous(ParameterKind::Rest);
        assert_eq!(param.name(), "");
        assert_eq!(param.to_string(), "*");
    }
}
