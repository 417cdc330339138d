use crate::local_index::LocalIndex;
use crate::remote_graph::RemoteGraph;
use crate::ResolverBackend;
use rdf_deref_model::ObjectDispatch;
use reqwest::Url;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// The executable that is used to search HDT files if none is configured.
pub const DEFAULT_INDEX_TOOL: &str = "hdtSearch";
/// Upper bound for both index queries of a single resolution.
pub const DEFAULT_LOCAL_INDEX_TIMEOUT: Duration = Duration::from_secs(5);
/// Upper bound for a single request to the SPARQL endpoint.
pub const DEFAULT_REMOTE_GRAPH_TIMEOUT: Duration = Duration::from_millis(1500);

/// Holds the configuration of the backend that answers all resolution requests.
#[derive(Clone, Debug)]
pub enum BackendConfig {
    LocalIndex(LocalIndexConfig),
    RemoteGraph(RemoteGraphConfig),
}

impl BackendConfig {
    /// Creates the backend described by this configuration.
    pub fn build(self) -> anyhow::Result<Arc<dyn ResolverBackend>> {
        Ok(match self {
            BackendConfig::LocalIndex(config) => Arc::new(LocalIndex::new(config)),
            BackendConfig::RemoteGraph(config) => Arc::new(RemoteGraph::new(config)?),
        })
    }
}

/// Configuration of a [LocalIndex].
#[derive(Clone, Debug)]
pub struct LocalIndexConfig {
    /// The index search executable, invoked as `<tool> -q <query> <index_file>`.
    pub tool: PathBuf,
    /// The HDT file to search.
    pub index_file: PathBuf,
    pub timeout: Duration,
    /// Which object terms of the tool's output are recognized.
    pub dispatch: ObjectDispatch,
}

impl LocalIndexConfig {
    /// Creates a configuration with the default tool, timeout and dispatch.
    pub fn new(index_file: impl Into<PathBuf>) -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_INDEX_TOOL),
            index_file: index_file.into(),
            timeout: DEFAULT_LOCAL_INDEX_TIMEOUT,
            dispatch: ObjectDispatch::default(),
        }
    }
}

/// Configuration of a [RemoteGraph].
#[derive(Clone, Debug)]
pub struct RemoteGraphConfig {
    /// The URL of the SPARQL 1.1 query endpoint.
    pub endpoint: Url,
    pub timeout: Duration,
}

impl RemoteGraphConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_REMOTE_GRAPH_TIMEOUT,
        }
    }
}
