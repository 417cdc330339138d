use crate::config::RemoteGraphConfig;
use crate::error::ResolveError;
use crate::{RemotePayload, Resolution, ResolverBackend};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use rdf_deref_model::validation::validate_uri;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::io;
use tracing::{debug, instrument};

/// Resolves URIs by sending `DESCRIBE` queries to a SPARQL 1.1 endpoint.
///
/// The endpoint's response is not parsed. Its body and content type are passed through.
#[derive(Debug)]
pub struct RemoteGraph {
    config: RemoteGraphConfig,
    client: Client,
}

impl RemoteGraph {
    /// Creates a new [RemoteGraph] with an HTTP client that enforces the configured timeout.
    pub fn new(config: RemoteGraphConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn request_error(&self, error: &reqwest::Error) -> ResolveError {
        if error.is_timeout() {
            ResolveError::Timeout(self.config.timeout)
        } else {
            ResolveError::execution(format!(
                "Could not query the SPARQL endpoint {}: {error}",
                self.config.endpoint
            ))
        }
    }
}

#[async_trait]
impl ResolverBackend for RemoteGraph {
    #[instrument(skip(self), level = "debug")]
    async fn resolve(&self, uri: &str) -> Result<Resolution, ResolveError> {
        validate_uri(uri)?;
        let query = describe_query(uri);
        debug!(endpoint = %self.config.endpoint, %query, "Querying SPARQL endpoint");

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .form(&[("query", query.as_str())])
            .send()
            .await
            .map_err(|error| self.request_error(&error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::execution(format!(
                "The SPARQL endpoint {} responded with {status}",
                self.config.endpoint
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes_stream().map_err(io::Error::other).boxed();
        Ok(Resolution::Payload(RemotePayload::new(content_type, body)))
    }
}

/// Builds the query that is sent to the endpoint.
///
/// `uri` must already be validated, it is embedded without escaping.
pub fn describe_query(uri: &str) -> String {
    format!("DESCRIBE <{uri}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe() {
        assert_eq!(
            describe_query("http://example.org/foo/bar"),
            "DESCRIBE <http://example.org/foo/bar>"
        );
    }
}
