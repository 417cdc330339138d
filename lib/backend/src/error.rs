use rdf_deref_model::{LineParseError, ValidationError};
use std::time::Duration;

/// An error raised while resolving a URI.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The URI or a query built from it contains characters that are not allowed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The index tool or the SPARQL endpoint could not be queried.
    #[error("{message}")]
    Execution { message: String },
    /// The backend did not answer in time.
    #[error("The backend did not respond within {0:?}")]
    Timeout(Duration),
    /// The index tool produced a line that is not a well-formed triple.
    #[error("Invalid output of the index tool: {0}")]
    Parse(#[from] LineParseError),
    /// The backend answered but knows nothing about the URI.
    #[error("No triples found for <{uri}>")]
    NotFound { uri: String },
}

impl ResolveError {
    pub(crate) fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }
}
