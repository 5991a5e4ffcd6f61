//! Home-page aggregate endpoint.

use axum::extract::State;
use axum::Json;
use catalog::{Movie, Screening, Theater};
use chrono::Local;
use query::filters::DateFilter;
use query::{grouping, FilterPipeline};
use serde::Serialize;

use crate::api::ApiError;
use crate::AppState;

/// Everything the landing page needs in one request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    /// First few movies in catalog order
    pub featured_movies: Vec<Movie>,
    pub theaters: Vec<Theater>,
    pub todays_screenings: Vec<Screening>,
}

const FEATURED_COUNT: usize = 4;

/// GET /api/home
pub async fn home(State(state): State<AppState>) -> Result<Json<HomeResponse>, ApiError> {
    let (movies, theaters, screenings) = tokio::join!(
        state.store.movies(),
        state.store.theaters(),
        state.store.screenings()
    );
    let movies = movies?;
    let theaters = theaters?;
    let screenings = screenings?;

    let today = Local::now().date_naive();
    let pipeline = FilterPipeline::new().add_filter(DateFilter::new(today));
    let todays = pipeline.apply(screenings.to_vec())?;

    Ok(Json(HomeResponse {
        featured_movies: movies.iter().take(FEATURED_COUNT).cloned().collect(),
        theaters: theaters.to_vec(),
        todays_screenings: grouping::sort_by_start_time(todays),
    }))
}
