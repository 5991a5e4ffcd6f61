//! Theater endpoints.

use axum::extract::{Path, State};
use axum::Json;
use catalog::{Screening, Theater};
use indexmap::IndexMap;
use query::filters::TheaterFilter;
use query::{find_by_id, grouping, FilterPipeline};

use crate::api::ApiError;
use crate::AppState;

/// GET /api/theaters
pub async fn list_theaters(State(state): State<AppState>) -> Result<Json<Vec<Theater>>, ApiError> {
    let theaters = state.store.theaters().await?;
    Ok(Json(theaters.to_vec()))
}

/// GET /api/theaters/:id
pub async fn get_theater(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Theater>, ApiError> {
    let theaters = state.store.theaters().await?;
    let theater = find_by_id(theaters.as_slice(), &id)
        .ok_or_else(|| ApiError::TheaterNotFound(id.clone()))?;
    Ok(Json(theater.clone()))
}

/// GET /api/theaters/:id/screenings
///
/// The theater page's upcoming-screenings listing, grouped by day.
pub async fn theater_screenings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IndexMap<String, Vec<Screening>>>, ApiError> {
    let (theaters, screenings) = tokio::join!(state.store.theaters(), state.store.screenings());
    let theaters = theaters?;
    let screenings = screenings?;

    if find_by_id(theaters.as_slice(), &id).is_none() {
        return Err(ApiError::TheaterNotFound(id));
    }

    let pipeline = FilterPipeline::new().add_filter(TheaterFilter::new(id));
    let here = pipeline.apply(screenings.to_vec())?;
    let sorted = grouping::sort_by_start_time(here);
    Ok(Json(grouping::group_by_date(&sorted)))
}
