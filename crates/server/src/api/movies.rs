//! Movie endpoints.

use axum::extract::{Path, State};
use axum::Json;
use catalog::{Movie, Screening};
use indexmap::IndexMap;
use query::filters::MovieFilter;
use query::{find_by_id, grouping, FilterPipeline};

use crate::api::ApiError;
use crate::AppState;

/// GET /api/movies
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.store.movies().await?;
    Ok(Json(movies.to_vec()))
}

/// GET /api/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let movies = state.store.movies().await?;
    let movie =
        find_by_id(movies.as_slice(), &id).ok_or_else(|| ApiError::MovieNotFound(id.clone()))?;
    Ok(Json(movie.clone()))
}

/// GET /api/movies/:id/screenings
///
/// The movie page's showtime listing: this movie's screenings, sorted by
/// start time and bucketed by calendar-day label.
pub async fn movie_screenings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IndexMap<String, Vec<Screening>>>, ApiError> {
    let (movies, screenings) = tokio::join!(state.store.movies(), state.store.screenings());
    let movies = movies?;
    let screenings = screenings?;

    if find_by_id(movies.as_slice(), &id).is_none() {
        return Err(ApiError::MovieNotFound(id));
    }

    let pipeline = FilterPipeline::new().add_filter(MovieFilter::new(id));
    let mine = pipeline.apply(screenings.to_vec())?;
    let sorted = grouping::sort_by_start_time(mine);
    Ok(Json(grouping::group_by_date(&sorted)))
}
