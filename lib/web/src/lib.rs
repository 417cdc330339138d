use axum::routing::get;
use axum::Router;
use rdf_deref_backend::ResolverBackend;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod content_negotiation;
mod error;
mod landing;
mod resources;

pub use config::ServerConfig;
pub use error::ResolverServerError;
pub use landing::default_landing_page;

use crate::landing::handle_landing_page;
use crate::resources::handle_resource_get;

/// Starts the HTTP server and resolves requests until the process receives Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let backend = config.backend.build()?;
    let app_state = AppState::new(backend, &config.namespace, config.landing_page);

    let app = create_router(app_state);
    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(config.bind.as_str()).await?;
    info!(address = %listener.local_addr()?, namespace = %config.namespace, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Creates the router that serves the landing page on `/` and resolves every other path.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_landing_page))
        .route("/{*path}", get(handle_resource_get))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

/// The state shared by all request handlers. It is never modified after startup.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn ResolverBackend>,
    namespace: Arc<str>,
    landing_page: Arc<str>,
}

impl AppState {
    /// Creates a new [AppState].
    ///
    /// A trailing `/` of `namespace` is removed. If no `landing_page` is given, the default page
    /// is used.
    pub fn new(
        backend: Arc<dyn ResolverBackend>,
        namespace: &str,
        landing_page: Option<String>,
    ) -> Self {
        let namespace = namespace.trim_end_matches('/');
        let landing_page = landing_page.unwrap_or_else(|| default_landing_page(namespace));
        Self {
            backend,
            namespace: namespace.into(),
            landing_page: landing_page.into(),
        }
    }

    /// Maps a request path (without its leading `/`) to the URI it identifies.
    pub fn resource_uri(&self, path: &str) -> String {
        format!("{}/{path}", self.namespace)
    }
}
