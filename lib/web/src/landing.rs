use crate::AppState;
use axum::extract::State;
use axum::response::Html;

/// The page that is served on `/` unless another one is configured.
pub fn default_landing_page(namespace: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>RDF Deref</title>
</head>
<body>
  <h1>RDF Deref</h1>
  <p>This server resolves URIs in the namespace <code>{namespace}/</code>.</p>
  <p>Request <code>/some/path</code> to retrieve all triples in which
     <code>{namespace}/some/path</code> is the subject or the object.</p>
</body>
</html>
"#
    )
}

pub async fn handle_landing_page(State(state): State<AppState>) -> Html<String> {
    Html(state.landing_page.to_string())
}
