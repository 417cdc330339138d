use crate::config::LocalIndexConfig;
use crate::error::ResolveError;
use crate::{Resolution, ResolverBackend};
use async_trait::async_trait;
use rdf_deref_model::validation::validate_uri;
use rdf_deref_model::{parse_line, IndexQuery, LineParseError, ObjectDispatch, Triple};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Resolves URIs by running an external index tool against an HDT file.
///
/// Every resolution runs two queries, one with the URI as subject and one with the URI as object.
/// The tool is killed if the resolution times out or its future is dropped.
#[derive(Debug)]
pub struct LocalIndex {
    config: LocalIndexConfig,
}

impl LocalIndex {
    pub fn new(config: LocalIndexConfig) -> Self {
        Self { config }
    }

    async fn run_queries(&self, uri: &str) -> Result<Vec<Triple>, ResolveError> {
        let mut triples = self.run_query(&IndexQuery::subject_bound(uri)?).await?;
        triples.extend(self.run_query(&IndexQuery::object_bound(uri)?).await?);
        Ok(triples)
    }

    async fn run_query(&self, query: &IndexQuery) -> Result<Vec<Triple>, ResolveError> {
        let tool = &self.config.tool;
        debug!(%query, tool = %tool.display(), "Running index query");

        let output = Command::new(tool)
            .arg("-q")
            .arg(query.as_str())
            .arg(&self.config.index_file)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|error| {
                ResolveError::execution(format!("Could not run '{}': {error}", tool.display()))
            })?;

        if !output.status.success() {
            return Err(ResolveError::execution(format!(
                "'{}' failed with {}: {}",
                tool.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|error| {
            ResolveError::execution(format!(
                "'{}' produced output that is not UTF-8: {error}",
                tool.display()
            ))
        })?;
        let triples = parse_index_output(&stdout, self.config.dispatch)?;
        debug!(%query, count = triples.len(), "Index query finished");
        Ok(triples)
    }
}

#[async_trait]
impl ResolverBackend for LocalIndex {
    #[instrument(skip(self), level = "debug")]
    async fn resolve(&self, uri: &str) -> Result<Resolution, ResolveError> {
        validate_uri(uri)?;

        let triples = tokio::time::timeout(self.config.timeout, self.run_queries(uri))
            .await
            .map_err(|_| ResolveError::Timeout(self.config.timeout))??;

        if triples.is_empty() {
            return Err(ResolveError::NotFound {
                uri: uri.to_owned(),
            });
        }
        Ok(Resolution::Triples(triples))
    }
}

/// Parses the standard output of the index tool.
///
/// Both `\n` and `\r` separate lines. Lines that do not start with `http` (banners, progress and
/// summary lines) are skipped. Any other line that is not a triple fails the whole output.
pub fn parse_index_output(
    output: &str,
    dispatch: ObjectDispatch,
) -> Result<Vec<Triple>, LineParseError> {
    output
        .split(['\n', '\r'])
        .filter(|line| line.starts_with("http"))
        .filter_map(|line| parse_line(line, dispatch).transpose())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_deref_model::{Literal, Term};

    #[test]
    fn output_filters_non_triple_lines() {
        let output = "Predicate-based search\r\
            http://ex.org/s http://ex.org/p \"a\"\r\n\
            \n\
            http://ex.org/s http://ex.org/q http://ex.org/o\n\
            2 results in 13 us\n";
        let triples = parse_index_output(output, ObjectDispatch::Http).unwrap();
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].object, Term::from(Literal::new_simple_literal("a")));
    }

    #[test]
    fn output_skips_unrecognized_objects() {
        let output = "http://ex.org/s http://ex.org/p _:b1\nhttp://ex.org/s http://ex.org/p \"a\"\n";
        let triples = parse_index_output(output, ObjectDispatch::Http).unwrap();
        assert_eq!(triples.len(), 1);
    }

    #[test]
    fn output_fails_on_malformed_triple() {
        let output = "http://ex.org/s http://ex.org/p \"a\"\nhttp://ex.org/s p http://ex.org/o\n";
        assert!(parse_index_output(output, ObjectDispatch::Http).is_err());
    }

    #[test]
    fn empty_output() {
        assert!(parse_index_output("", ObjectDispatch::Http).unwrap().is_empty());
    }
}
