//! API documentation: the OpenAPI document and a browsable rendering of it.

use crate::openapi::api_doc;
use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub const DOCS_PATH: &str = "/api-docs";
pub const DOCS_JSON_PATH: &str = "/api-docs-json";

const SWAGGER_UI: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Movies API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs-json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

async fn docs_page() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

/// `GET /api-docs` (HTML) and `GET /api-docs-json` (OpenAPI). The document is built once.
pub fn docs_routes() -> Router {
    let doc = Arc::new(api_doc());
    Router::new()
        .route(DOCS_PATH, get(docs_page))
        .route(
            DOCS_JSON_PATH,
            get(move || {
                let doc = Arc::clone(&doc);
                async move {
                    ([(header::CACHE_CONTROL, "no-store")], Json(doc.as_ref())).into_response()
                }
            }),
        )
}
