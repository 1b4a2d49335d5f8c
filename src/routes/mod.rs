//! Route tables and the assembled application router.

mod common;
mod docs;
mod movies;

pub use common::common_routes;
pub use docs::{docs_routes, DOCS_JSON_PATH, DOCS_PATH};
pub use movies::movie_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::StatusCode, Router};
use tower_http::limit::RequestBodyLimitLayer;

pub const ROUTE_NOT_FOUND: &str = "route not found";

/// Plain-text 404 for anything no route matches.
pub async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}

/// Full application: movies, docs and operational routes, a body size limit, and a process-wide 404 fallback.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(movie_routes(state))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
}
