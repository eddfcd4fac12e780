//! Generated OpenAPI document and the swagger UI page that renders it.

use crate::handlers::articles::{self, MessageBody};
use crate::handlers::greeting::{self, GreetingBody};
use crate::model::{Article, NewArticle};
use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

/// OpenAPI document covering the greeting and article operations.
#[derive(OpenApi)]
#[openapi(
    info(title = "Articles API", description = "List and create articles"),
    paths(
        greeting::greeting,
        articles::list_articles,
        articles::create_article
    ),
    components(schemas(Article, NewArticle, GreetingBody, MessageBody))
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document as JSON.
pub async fn apispec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// UI assets come from the unpkg CDN; only this shell page is served locally.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Articles API docs</title>
  <link rel="stylesheet" href="//unpkg.com/swagger-ui-dist@3/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="//unpkg.com/swagger-ui-dist@3/swagger-ui-bundle.js"></script>
  <script src="//unpkg.com/swagger-ui-dist@3/swagger-ui-standalone-preset.js"></script>
  <script>
    window.onload = function () {
      window.ui = SwaggerUIBundle({
        url: "/apispec_1.json",
        dom_id: "#swagger-ui",
        presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
        layout: "StandaloneLayout"
      });
    };
  </script>
</body>
</html>
"##;

/// Swagger UI shell pointing at [`apispec`].
pub async fn apidocs() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}
