//! Character-class validation for everything that is handed to the index tool or embedded into
//! a SPARQL query.
//!
//! Only `[A-Za-z0-9:/._#%-]` is accepted. This excludes all shell and argument metacharacters
//! (`;`, `&`, `|`, quotes, whitespace) as well as the `<` and `>` that delimit an IRI in SPARQL.

use crate::error::{ValidationError, ValidationTarget};
use regex::Regex;
use std::sync::LazyLock;

const FIELD: &str = r"(?:\?|[A-Za-z0-9:/._#%-]+)";

#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static QUERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{FIELD} {FIELD} {FIELD}$")).expect("Invalid built-in query pattern")
});

#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9:/._#%-]+$").expect("Invalid built-in URI pattern")
});

/// Compiles the validation patterns.
///
/// Calling this during startup makes a broken pattern fail the process instead of a request.
pub fn init() {
    LazyLock::force(&QUERY_PATTERN);
    LazyLock::force(&URI_PATTERN);
}

/// Returns whether `query` consists of exactly three space-separated fields, each either the
/// wildcard `?` or a non-empty run of allowed characters.
pub fn is_valid_query(query: &str) -> bool {
    QUERY_PATTERN.is_match(query)
}

/// Returns whether `uri` is a non-empty run of allowed characters.
pub fn is_valid_uri(uri: &str) -> bool {
    URI_PATTERN.is_match(uri)
}

/// Like [is_valid_query] but returns a [ValidationError] describing the rejected input.
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
    if is_valid_query(query) {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationTarget::Query, query))
    }
}

/// Like [is_valid_uri] but returns a [ValidationError] describing the rejected input.
pub fn validate_uri(uri: &str) -> Result<(), ValidationError> {
    if is_valid_uri(uri) {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationTarget::Uri, uri))
    }
}
