//! Error-to-response mapping for the HTTP boundary.
//!
//! Client input problems map to 400, absence to 404, and load failures to
//! 500 with a generic body (the details go to the log, not the wire). A
//! handler error never takes the process down.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog::CatalogError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    /// `date` query parameter absent
    MissingDate,
    /// `date` query parameter present but unparseable
    InvalidDate(String),
    MovieNotFound(String),
    TheaterNotFound(String),
    /// Catalog ingestion failed; distinguishable from an empty collection
    Load(CatalogError),
    Internal(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self::Load(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingDate => (
                StatusCode::BAD_REQUEST,
                "Date parameter is required".to_string(),
            ),
            ApiError::InvalidDate(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid date format: {raw}"),
            ),
            ApiError::MovieNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Movie not found: {id}"))
            }
            ApiError::TheaterNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Theater not found: {id}"))
            }
            ApiError::Load(err) => {
                error!(reason = %err, "catalog load failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load catalog data".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                error!(reason = %msg, "handler failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
