//! Movie catalogue routes
//!
//! Read-only listing and detail lookups over the `movies` table.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::{ApiPath, PageMeta, PaginationParams, ValidatedQuery};
use crate::app::AppState;
use crate::domain::{MovieDetailResponse, MovieListResponse};
use crate::error::{ApiError, ApiResult};

/// GET {prefix}/movies/?page=&per_page=
///
/// One page of movies with navigation links. Pages past the end are a 404,
/// the same as an empty table.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(pagination): ValidatedQuery<PaginationParams>,
) -> ApiResult<Json<MovieListResponse>> {
    tracing::info!(
        page = pagination.page,
        per_page = pagination.per_page,
        "Listing movies"
    );

    let no_movies = || ApiError::not_found("No movies found.");

    let offset = pagination.offset().ok_or_else(no_movies)?;
    let rows = state.movies.fetch_page(pagination.limit(), offset).await?;

    if rows.is_empty() {
        return Err(no_movies());
    }

    let movies: Vec<MovieDetailResponse> = rows.into_iter().map(Into::into).collect();

    // Separate statement: not consistent with the page under concurrent writes
    let total_items = state.movies.count().await?;
    let meta = PageMeta::new(&pagination, total_items, &state.movies_path());

    Ok(Json(MovieListResponse {
        movies,
        prev_page: meta.prev_page,
        next_page: meta.next_page,
        total_pages: meta.total_pages,
        total_items: meta.total_items,
    }))
}

/// GET {prefix}/movies/:film_id/
///
/// Any integer is accepted; ids outside the column's range simply match
/// nothing.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    ApiPath(film_id): ApiPath<i64>,
) -> ApiResult<Json<MovieDetailResponse>> {
    tracing::info!(film_id, "Getting movie");

    let not_found = || ApiError::not_found("Movie with the given ID was not found.");

    let film_id = i32::try_from(film_id).map_err(|_| not_found())?;
    let movie = state
        .movies
        .find_by_id(film_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(movie.into()))
}
