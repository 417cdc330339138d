#![cfg(test)]

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Router};
use futures::TryStreamExt;
use rdf_deref_backend::{
    BackendConfig, RemoteGraph, RemoteGraphConfig, RemotePayload, Resolution, ResolveError,
    ResolverBackend,
};
use reqwest::Url;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const URI: &str = "http://example.org/foo/bar";

/// Starts a fake SPARQL endpoint on an ephemeral port.
async fn spawn_endpoint(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });
    addr
}

fn remote_graph(addr: SocketAddr, timeout: Duration) -> RemoteGraph {
    let endpoint = Url::parse(&format!("http://{addr}/sparql")).unwrap();
    let mut config = RemoteGraphConfig::new(endpoint);
    config.timeout = timeout;
    RemoteGraph::new(config).unwrap()
}

fn payload(resolution: Resolution) -> RemotePayload {
    match resolution {
        Resolution::Payload(payload) => payload,
        Resolution::Triples(_) => panic!("expected a payload"),
    }
}

async fn body_text(payload: RemotePayload) -> String {
    let chunks: Vec<_> = payload.into_body().try_collect().await.unwrap();
    String::from_utf8(chunks.concat()).unwrap()
}

/// Echoes the received query inside an RDF/XML comment.
async fn echo_query(
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    assert_eq!(
        headers.get(CONTENT_TYPE).unwrap(),
        "application/x-www-form-urlencoded"
    );
    (
        [(CONTENT_TYPE, "application/rdf+xml")],
        format!("<!-- {} -->", form["query"]),
    )
}

#[tokio::test]
async fn describe_query_is_passed_through() {
    let addr = spawn_endpoint(Router::new().route("/sparql", post(echo_query))).await;
    let backend = remote_graph(addr, Duration::from_secs(5));

    let payload = payload(backend.resolve(URI).await.unwrap());

    assert_eq!(payload.content_type(), Some("application/rdf+xml"));
    assert_eq!(
        body_text(payload).await,
        "<!-- DESCRIBE <http://example.org/foo/bar> -->"
    );
}

#[tokio::test]
async fn built_from_config() {
    let addr = spawn_endpoint(Router::new().route("/sparql", post(echo_query))).await;
    let endpoint = Url::parse(&format!("http://{addr}/sparql")).unwrap();
    let backend = BackendConfig::RemoteGraph(RemoteGraphConfig::new(endpoint))
        .build()
        .unwrap();

    let payload = payload(backend.resolve(URI).await.unwrap());

    assert!(body_text(payload).await.contains("DESCRIBE"));
}

#[tokio::test]
async fn endpoint_error_is_execution_error() {
    let app = Router::new().route(
        "/sparql",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    );
    let addr = spawn_endpoint(app).await;
    let backend = remote_graph(addr, Duration::from_secs(5));

    let error = backend.resolve(URI).await.unwrap_err();

    match error {
        ResolveError::Execution { message } => assert!(message.contains("503"), "{message}"),
        error => panic!("unexpected error {error:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_execution_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let backend = remote_graph(addr, Duration::from_secs(5));

    let error = backend.resolve(URI).await.unwrap_err();

    assert!(matches!(error, ResolveError::Execution { .. }), "{error:?}");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let app = Router::new().route(
        "/sparql",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let addr = spawn_endpoint(app).await;
    let backend = remote_graph(addr, Duration::from_millis(200));

    let error = backend.resolve(URI).await.unwrap_err();

    assert!(matches!(error, ResolveError::Timeout(_)), "{error:?}");
}

#[tokio::test]
async fn injection_is_rejected_before_request() {
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);
    let app = Router::new().route(
        "/sparql",
        post(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { "" }
        }),
    );
    let addr = spawn_endpoint(app).await;
    let backend = remote_graph(addr, Duration::from_secs(5));

    let error = backend
        .resolve("http://example.org/a> ?p ?o } #")
        .await
        .unwrap_err();

    assert!(matches!(error, ResolveError::Validation(_)));
    assert_eq!(requests.load(Ordering::SeqCst), 0);
}
