use rdf_deref_backend::BackendConfig;

/// Holds the configuration for a RDF Deref web server.
pub struct ServerConfig {
    /// The IP address or DNS name and the port that the socket binds to.
    pub bind: String,
    /// The URI prefix of all resources, e.g. `http://example.org`.
    pub namespace: String,
    /// The backend that resolves URIs.
    pub backend: BackendConfig,
    /// HTML that replaces the default landing page.
    pub landing_page: Option<String>,
    /// Whether CORS is enabled.
    pub cors: bool,
}
