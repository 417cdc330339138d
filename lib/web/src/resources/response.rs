use crate::error::ResolverServerError;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use oxrdfio::{RdfFormat, RdfSerializer};
use rdf_deref_backend::RemotePayload;
use rdf_deref_model::Triple;
use std::io;

/// Wraps resolved [Triple]s that can be converted into a [Response].
pub struct TriplesResponse {
    triples: Vec<Triple>,
    format: RdfFormat,
}

impl TriplesResponse {
    pub fn new(triples: Vec<Triple>, format: RdfFormat) -> Self {
        Self { triples, format }
    }
}

impl IntoResponse for TriplesResponse {
    fn into_response(self) -> Response {
        match serialize_triples(&self.triples, self.format) {
            Ok(buffer) => ([(CONTENT_TYPE, self.format.media_type())], buffer).into_response(),
            Err(error) => ResolverServerError::Internal(error.into()).into_response(),
        }
    }
}

fn serialize_triples(triples: &[Triple], format: RdfFormat) -> io::Result<Vec<u8>> {
    let mut serializer = RdfSerializer::from_format(format).for_writer(Vec::new());
    for triple in triples {
        serializer.serialize_triple(triple)?;
    }
    serializer.finish()
}

/// Streams the response of a remote endpoint to the client.
pub struct PayloadResponse(RemotePayload);

impl PayloadResponse {
    pub fn new(payload: RemotePayload) -> Self {
        Self(payload)
    }
}

impl IntoResponse for PayloadResponse {
    fn into_response(self) -> Response {
        let content_type = self
            .0
            .content_type()
            .and_then(|value| HeaderValue::from_str(value).ok());
        let mut response = Body::from_stream(self.0.into_body()).into_response();
        if let Some(content_type) = content_type {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_deref_model::{Literal, NamedNode};

    #[test]
    fn n_triples_one_line_per_triple() {
        let triples = vec![
            Triple::new(
                NamedNode::new_unchecked("http://example.org/foo/bar"),
                NamedNode::new_unchecked("http://ex.org/p"),
                Literal::new_simple_literal("hello"),
            ),
            Triple::new(
                NamedNode::new_unchecked("http://example.org/foo/bar"),
                NamedNode::new_unchecked("http://ex.org/q"),
                NamedNode::new_unchecked("http://ex.org/o"),
            ),
        ];

        let buffer = serialize_triples(&triples, RdfFormat::NTriples).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<http://example.org/foo/bar> <http://ex.org/p> \"hello\" .\n\
             <http://example.org/foo/bar> <http://ex.org/q> <http://ex.org/o> .\n"
        );
    }
}
