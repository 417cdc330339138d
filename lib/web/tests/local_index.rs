#![cfg(all(test, unix))]

use assert_fs::prelude::*;
use assert_fs::TempDir;
use axum::http::StatusCode;
use axum_test::TestServer;
use rdf_deref_backend::{BackendConfig, LocalIndexConfig};
use rdf_deref_test_utils::fake_index_tool;
use rdf_deref_web::{create_router, AppState};

/// Answers the subject query for `http://example.org/foo/bar` with a single triple and every
/// other query with nothing.
const FAKE_HDT_SEARCH: &str = r#"if [ "$2" = "http://example.org/foo/bar ? ?" ]; then
  echo 'http://example.org/foo/bar http://ex.org/p "hello"'
fi
echo 'Query done.'"#;

fn server(dir: &TempDir) -> TestServer {
    let mut config = LocalIndexConfig::new(dir.path().join("index.hdt"));
    config.tool = fake_index_tool(dir, FAKE_HDT_SEARCH);
    let backend = BackendConfig::LocalIndex(config).build().unwrap();
    let state = AppState::new(backend, "http://example.org", None);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn resolves_single_triple() {
    let dir = TempDir::new().unwrap();
    let server = server(&dir);

    let response = server.get("/foo/bar").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.text(),
        "<http://example.org/foo/bar> <http://ex.org/p> \"hello\" .\n"
    );
}

#[tokio::test]
async fn unknown_resource_is_not_found() {
    let dir = TempDir::new().unwrap();
    let server = server(&dir);

    let response = server.get("/foo/baz").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    dir.child("invoked")
        .assert("http://example.org/foo/baz ? ?\n? ? http://example.org/foo/baz\n");
}

#[tokio::test]
async fn invalid_path_is_rejected_before_tool_runs() {
    let dir = TempDir::new().unwrap();
    let server = server(&dir);

    let response = server.get("/foo;bar").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.get("/foo%3Bbar").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    dir.child("invoked").assert(predicates::path::missing());
}
