//! Server crate for the Marquee listings site.
//!
//! This crate exposes the catalog over HTTP: collection listings, single
//! entity lookups, the by-date screening filter, and the home-page
//! aggregate. Handlers read through the injected [`CatalogStore`], so the
//! first request for each collection pays the ingestion cost and every
//! later one is served from memory.

use axum::Router;
use catalog::CatalogStore;
use std::sync::Arc;

pub mod api;

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lazily-populated catalog cache
    pub store: Arc<CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/movies", get(api::list_movies))
        .route("/api/movies/:id", get(api::get_movie))
        .route("/api/movies/:id/screenings", get(api::movie_screenings))
        .route("/api/theaters", get(api::list_theaters))
        .route("/api/theaters/:id", get(api::get_theater))
        .route("/api/theaters/:id/screenings", get(api::theater_screenings))
        .route("/api/screenings", get(api::list_screenings))
        .route("/api/screenings/by-date", get(api::screenings_by_date))
        .route("/api/home", get(api::home))
        .route("/health", get(api::health))
        .with_state(state)
}
