//! Parsing of the line-based output of the index tool.
//!
//! Each result line has the form `<subject> <predicate> <object>`, separated by single spaces and
//! without angle brackets around IRIs. Literals are printed with their quotes and an optional
//! language tag or datatype, e.g. `"Paris"@fr`.

use crate::error::{LineParseError, LineParseErrorKind, TermPosition};
use oxrdf::{BlankNode, Literal, NamedNode, Term, Triple};
use std::str::FromStr;

/// Decides which object terms are recognized.
///
/// Objects that are not recognized cause the line to be skipped, not rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectDispatch {
    /// Objects starting with `h` are IRIs and objects starting with `"` are literals.
    ///
    /// Blank nodes and IRIs with other schemes (`urn:`, `ftp:`, ...) are skipped.
    #[default]
    Http,
    /// In addition to [ObjectDispatch::Http], recognizes `_:` blank nodes, `<...>` IRIs and any
    /// token that starts with a URI scheme.
    Extended,
}

/// Parses a single line of index tool output.
///
/// Returns `Ok(None)` if the object is of a kind that `dispatch` does not recognize. Extra tokens
/// after the object are ignored.
pub fn parse_line(line: &str, dispatch: ObjectDispatch) -> Result<Option<Triple>, LineParseError> {
    let mut parts = line.splitn(3, ' ');
    let subject = parse_named_node(parts.next(), TermPosition::Subject)?;
    let predicate = parse_named_node(parts.next(), TermPosition::Predicate)?;
    let object = match parts.next() {
        Some(rest) if !rest.is_empty() => parse_object(rest, dispatch)?,
        _ => return Err(LineParseError::new(TermPosition::Object, "", LineParseErrorKind::Missing)),
    };
    Ok(object.map(|object| Triple::new(subject, predicate, object)))
}

fn parse_named_node(token: Option<&str>, position: TermPosition) -> Result<NamedNode, LineParseError> {
    match token {
        None | Some("") => Err(LineParseError::new(position, "", LineParseErrorKind::Missing)),
        Some(token) => {
            NamedNode::new(token).map_err(|error| LineParseError::new(position, token, error))
        }
    }
}

/// `rest` is everything after the predicate. Literals may contain spaces, so they are parsed from
/// the whole remainder while all other terms only use the first token.
fn parse_object(rest: &str, dispatch: ObjectDispatch) -> Result<Option<Term>, LineParseError> {
    let token = rest.split(' ').next().unwrap_or(rest);
    let object_error = |kind: LineParseErrorKind| LineParseError::new(TermPosition::Object, token, kind);

    if token.starts_with('h') {
        return NamedNode::new(token)
            .map(|node| Some(node.into()))
            .map_err(|error| object_error(error.into()));
    }
    if token.starts_with('"') {
        return parse_literal(rest.trim_end(), token)
            .map(|literal| Some(literal.into()))
            .map_err(object_error);
    }
    if dispatch == ObjectDispatch::Http {
        return Ok(None);
    }

    if let Some(id) = token.strip_prefix("_:") {
        return BlankNode::new(id)
            .map(|node| Some(node.into()))
            .map_err(|error| object_error(error.into()));
    }
    if let Some(iri) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return NamedNode::new(iri)
            .map(|node| Some(node.into()))
            .map_err(|error| object_error(error.into()));
    }
    if has_scheme(token) {
        return NamedNode::new(token)
            .map(|node| Some(node.into()))
            .map_err(|error| object_error(error.into()));
    }
    Ok(None)
}

fn parse_literal(rest: &str, token: &str) -> Result<Literal, LineParseErrorKind> {
    if let Ok(literal) = Literal::from_str(rest) {
        return Ok(literal);
    }
    if let Ok(literal) = Literal::from_str(token) {
        return Ok(literal);
    }
    parse_raw_literal(rest)
}

/// Splits a literal that is not valid N-Triples (e.g. because of unescaped quotes or trailing
/// tokens). Candidate closing quotes are tried right to left; the first one followed by nothing,
/// a language tag or a datatype (up to the next space) wins. The lexical value is kept verbatim.
fn parse_raw_literal(text: &str) -> Result<Literal, LineParseErrorKind> {
    let mut error = LineParseErrorKind::MalformedLiteral;
    for (close, _) in text.rmatch_indices('"').filter(|(close, _)| *close > 0) {
        let value = &text[1..close];
        let suffix = text[close + 1..].split(' ').next().unwrap_or_default();
        match literal_with_suffix(value, suffix) {
            Some(Ok(literal)) => return Ok(literal),
            Some(Err(kind)) => error = kind,
            None => {}
        }
    }
    Err(error)
}

fn literal_with_suffix(value: &str, suffix: &str) -> Option<Result<Literal, LineParseErrorKind>> {
    if suffix.is_empty() {
        return Some(Ok(Literal::new_simple_literal(value)));
    }
    if let Some(language) = suffix.strip_prefix('@') {
        return Some(
            Literal::new_language_tagged_literal(value, language).map_err(LineParseErrorKind::from),
        );
    }
    let datatype = suffix.strip_prefix("^^<")?.strip_suffix('>')?;
    Some(
        NamedNode::new(datatype)
            .map(|datatype| Literal::new_typed_literal(value, datatype))
            .map_err(LineParseErrorKind::from),
    )
}

/// `scheme ":"` where `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` (RFC 3986).
fn has_scheme(token: &str) -> bool {
    let Some((scheme, _)) = token.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
