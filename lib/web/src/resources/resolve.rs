use crate::error::ResolverServerError;
use crate::resources::response::{PayloadResponse, TriplesResponse};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use oxrdfio::RdfFormat;
use rdf_deref_backend::{Resolution, ResolveError};
use tracing::{debug, error, info};

/// Paths that browsers request on their own. They are answered without asking the backend.
const IGNORED_PATHS: [&str; 1] = ["favicon.ico"];

/// Resolves `namespace/path` and returns everything the backend knows about it.
///
/// The format is only negotiated for triples that are serialized here. Payloads of a remote
/// endpoint are passed through as they are.
pub async fn handle_resource_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
    rdf_format: Result<RdfFormat, ResolverServerError>,
) -> Result<Response, ResolverServerError> {
    let path = resource_path(&path);
    if path.is_empty() {
        return Ok(Html(state.landing_page.to_string()).into_response());
    }
    if IGNORED_PATHS.contains(&path) {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let uri = state.resource_uri(path);
    let resolution = state.backend.resolve(&uri).await.map_err(|error| {
        log_resolve_error(&uri, &error);
        ResolverServerError::from(error)
    })?;

    Ok(match resolution {
        Resolution::Triples(triples) => {
            debug!(%uri, count = triples.len(), "Resolved");
            TriplesResponse::new(triples, rdf_format?).into_response()
        }
        Resolution::Payload(payload) => {
            debug!(%uri, "Passing through payload");
            PayloadResponse::new(payload).into_response()
        }
    })
}

/// Drops the single separator in front of the captured path. Further slashes belong to the
/// resource and are kept.
fn resource_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

fn log_resolve_error(uri: &str, resolve_error: &ResolveError) {
    match resolve_error {
        ResolveError::NotFound { .. } => debug!(%uri, "{resolve_error}"),
        ResolveError::Validation(_) => info!(%uri, "Rejected request: {resolve_error}"),
        ResolveError::Execution { .. } | ResolveError::Timeout(_) | ResolveError::Parse(_) => {
            error!(%uri, "Resolution failed: {resolve_error}");
        }
    }
}
