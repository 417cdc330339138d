use crate::error::ValidationError;
use crate::validation::validate_query;
use std::fmt::{Display, Formatter};

/// A triple pattern understood by the index tool, e.g. `http://ex.org/s ? ?`.
///
/// An [IndexQuery] can only be created through validating constructors. Holding one therefore
/// guarantees that it is safe to pass as a process argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexQuery(String);

impl IndexQuery {
    /// Validates `query` and wraps it.
    pub fn parse(query: impl Into<String>) -> Result<Self, ValidationError> {
        let query = query.into();
        validate_query(&query)?;
        Ok(Self(query))
    }

    /// Creates a query for all triples with `uri` as subject.
    pub fn subject_bound(uri: &str) -> Result<Self, ValidationError> {
        Self::parse(format!("{uri} ? ?"))
    }

    /// Creates a query for all triples with `uri` as object.
    pub fn object_bound(uri: &str) -> Result<Self, ValidationError> {
        Self::parse(format!("? ? {uri}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for IndexQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
