use oxrdf::{BlankNodeIdParseError, IriParseError, LanguageTagParseError};
use std::fmt::{Display, Formatter};

/// The kind of input that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationTarget {
    /// A three-field index query.
    Query,
    /// A single URI.
    Uri,
}

impl Display for ValidationTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationTarget::Query => f.write_str("query"),
            ValidationTarget::Uri => f.write_str("URI"),
        }
    }
}

/// An input contains characters outside of the allowed character class.
///
/// Such inputs are rejected before they reach the index tool or the SPARQL endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("The {target} contains invalid characters: '{input}'")]
pub struct ValidationError {
    target: ValidationTarget,
    input: String,
}

impl ValidationError {
    pub(crate) fn new(target: ValidationTarget, input: impl Into<String>) -> Self {
        Self {
            target,
            input: input.into(),
        }
    }

    /// What kind of input was rejected.
    pub fn target(&self) -> ValidationTarget {
        self.target
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// The position of a term within a triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermPosition {
    Subject,
    Predicate,
    Object,
}

impl Display for TermPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TermPosition::Subject => f.write_str("subject"),
            TermPosition::Predicate => f.write_str("predicate"),
            TermPosition::Object => f.write_str("object"),
        }
    }
}

/// A line of index tool output could not be turned into a triple.
#[derive(Debug, thiserror::Error)]
#[error("Could not convert {position} '{token}': {kind}")]
pub struct LineParseError {
    position: TermPosition,
    token: String,
    #[source]
    kind: LineParseErrorKind,
}

impl LineParseError {
    pub(crate) fn new(
        position: TermPosition,
        token: impl Into<String>,
        kind: impl Into<LineParseErrorKind>,
    ) -> Self {
        Self {
            position,
            token: token.into(),
            kind: kind.into(),
        }
    }

    /// The position of the offending term.
    pub fn position(&self) -> TermPosition {
        self.position
    }

    /// The raw text of the offending term.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn kind(&self) -> &LineParseErrorKind {
        &self.kind
    }
}

/// Why a single term could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum LineParseErrorKind {
    #[error("the term is missing")]
    Missing,
    #[error(transparent)]
    Iri(#[from] IriParseError),
    #[error(transparent)]
    BlankNode(#[from] BlankNodeIdParseError),
    #[error(transparent)]
    LanguageTag(#[from] LanguageTagParseError),
    #[error("the literal is not terminated by a quote or has an unknown suffix")]
    MalformedLiteral,
}
