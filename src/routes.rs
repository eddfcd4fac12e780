//! Router assembly: application routes plus generated API docs.

use crate::apidoc;
use crate::handlers::{articles, greeting};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Greeting and article routes.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::greeting))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .with_state(state)
}

/// API documentation routes: swagger UI shell and the generated spec.
pub fn apidoc_routes() -> Router {
    Router::new()
        .route("/apidocs/", get(apidoc::apidocs))
        .route("/apispec_1.json", get(apidoc::apispec))
}

/// Full application router with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(app_routes(state))
        .merge(apidoc_routes())
        .layer(TraceLayer::new_for_http())
}
