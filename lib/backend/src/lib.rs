//! Backends that find the triples describing a URI.
//!
//! - [LocalIndex]: runs an external index tool (e.g. `hdtSearch`) against an HDT file and parses
//!   its output into [Triple]s.
//! - [RemoteGraph]: sends a `DESCRIBE` query to a SPARQL endpoint and passes the serialized
//!   response through.

mod config;
mod error;
mod local_index;
mod remote_graph;

pub use config::*;
pub use error::ResolveError;
pub use local_index::{parse_index_output, LocalIndex};
pub use remote_graph::{describe_query, RemoteGraph};
pub use reqwest::Url;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use rdf_deref_model::Triple;
use std::fmt::{Debug, Formatter};
use std::io;

/// A source of triples for URI resolution.
///
/// Implementations are shared between all concurrent requests and must not hold locks across
/// calls to the underlying data source.
#[async_trait]
pub trait ResolverBackend: Debug + Send + Sync {
    /// Finds everything known about `uri`.
    ///
    /// `uri` must pass [rdf_deref_model::validation::is_valid_uri], otherwise a
    /// [ResolveError::Validation] is returned before any query is issued.
    async fn resolve(&self, uri: &str) -> Result<Resolution, ResolveError>;
}

/// The result of a successful resolution.
#[derive(Debug)]
pub enum Resolution {
    /// The triples in which the URI is subject or object. Never empty.
    Triples(Vec<Triple>),
    /// An already serialized RDF document that is passed through unchanged.
    Payload(RemotePayload),
}

/// The streamed response of a remote endpoint.
pub struct RemotePayload {
    content_type: Option<String>,
    body: BoxStream<'static, io::Result<Bytes>>,
}

impl RemotePayload {
    pub fn new(content_type: Option<String>, body: BoxStream<'static, io::Result<Bytes>>) -> Self {
        Self { content_type, body }
    }

    /// The `Content-Type` reported by the endpoint, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn into_body(self) -> BoxStream<'static, io::Result<Bytes>> {
        self.body
    }
}

impl Debug for RemotePayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemotePayload")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}
