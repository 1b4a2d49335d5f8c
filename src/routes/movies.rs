//! Movie CRUD routes.

use super::route_not_found;
use crate::handlers::movie::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `GET|POST /movies` and `GET|PATCH|DELETE /movies/:id`. Other methods on these paths are 404.
pub fn movie_routes(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list).post(create).fallback(route_not_found))
        .route(
            "/movies/:id",
            get(read)
                .patch(update)
                .delete(delete_handler)
                .fallback(route_not_found),
        )
        .with_state(state)
}
