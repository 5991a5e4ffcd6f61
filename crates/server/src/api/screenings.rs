//! Screening endpoints.

use axum::extract::{Query, State};
use axum::Json;
use catalog::Screening;
use query::dates::parse_query_date;
use query::filters::DateFilter;
use query::{grouping, FilterPipeline};
use serde::Deserialize;

use crate::api::ApiError;
use crate::AppState;

/// Query parameters for the by-date listing.
#[derive(Debug, Deserialize)]
pub struct ByDateQuery {
    /// ISO date or datetime; datetimes are truncated to their day
    pub date: Option<String>,
}

/// GET /api/screenings
pub async fn list_screenings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Screening>>, ApiError> {
    let screenings = state.store.screenings().await?;
    Ok(Json(screenings.to_vec()))
}

/// GET /api/screenings/by-date?date=2024-03-10
///
/// A missing `date` is a client error, as is one that doesn't parse;
/// both are distinct from a catalog load failure (500).
pub async fn screenings_by_date(
    State(state): State<AppState>,
    Query(query): Query<ByDateQuery>,
) -> Result<Json<Vec<Screening>>, ApiError> {
    let raw = query.date.ok_or(ApiError::MissingDate)?;
    let date = parse_query_date(&raw).ok_or_else(|| ApiError::InvalidDate(raw))?;

    let screenings = state.store.screenings().await?;
    let pipeline = FilterPipeline::new().add_filter(DateFilter::new(date));
    let on_date = pipeline.apply(screenings.to_vec())?;
    Ok(Json(grouping::sort_by_start_time(on_date)))
}
