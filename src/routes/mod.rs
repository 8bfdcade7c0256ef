pub mod health;
pub mod movies;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
///
/// Movie routes live under `prefix`; the health check stays at the root.
pub fn api_router(prefix: &str) -> Router<Arc<AppState>> {
    let movies = Router::new()
        .route("/movies/", get(movies::list_movies))
        .route("/movies/:film_id/", get(movies::get_movie));

    let router = Router::new().route("/health", get(health::health_check));

    // `nest` rejects an empty path
    if prefix.is_empty() {
        router.merge(movies)
    } else {
        router.nest(prefix, movies)
    }
}
