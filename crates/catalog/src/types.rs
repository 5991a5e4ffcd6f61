//! Core domain types for the screening catalog.
//!
//! This module defines the three entity collections served by the site:
//! movies, theaters, and the screenings that join them. All types are
//! plain data, immutable once loaded, and serialize with camelCase field
//! names to match the wire format the site's pages consume.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up movie IDs with
// theater IDs in function signatures.

/// Unique identifier for a movie (e.g., "movie3")
pub type MovieId = String;

/// Unique identifier for a theater (e.g., "siff-egyptian")
pub type TheaterId = String;

/// Unique identifier for a screening
pub type ScreeningId = String;

// =============================================================================
// Movie
// =============================================================================

/// A film in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    /// Runtime in minutes
    pub duration: u32,
    pub synopsis: String,
    /// Opaque poster reference, e.g. "/images/parasite.jpg"
    pub poster_url: String,
    /// Ordered genre list, comma-separated in the backing CSV
    pub genres: Vec<String>,
    pub language: String,
    pub release_year: i32,
}

// =============================================================================
// Theater
// =============================================================================

/// Geographic coordinate of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A venue where screenings take place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theater {
    pub id: TheaterId,
    pub name: String,
    pub address: String,
    pub location: Location,
    /// Ordered amenity list, comma-separated in the backing CSV
    pub amenities: Vec<String>,
}

// =============================================================================
// Screening
// =============================================================================

/// A single scheduled showing of a movie at a specific theater and screen.
///
/// The `movie_id`/`theater_id` references are not validated at load time;
/// a screening may dangle and lookups simply come back empty for it.
/// Timestamps are timezone-naive wall-clock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screening {
    pub id: ScreeningId,
    pub movie_id: MovieId,
    pub theater_id: TheaterId,
    /// Screen within the theater, e.g. "screen-2"; not validated
    pub screen_id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Free-form projection format tag, e.g. "Digital" or "35mm"
    pub format: String,
    pub special_event: bool,
    pub ticket_url: String,
}

// =============================================================================
// Catalog - the loaded data set
// =============================================================================

/// All three collections, fully loaded into memory.
///
/// Built once by [`Catalog::load_from_dir`](crate::load) and never mutated
/// afterwards. Collection order is CSV row order, which is what lookup and
/// search results preserve.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub movies: Vec<Movie>,
    pub theaters: Vec<Theater>,
    pub screenings: Vec<Screening>,
}

impl Catalog {
    /// Per-collection record counts, mostly for startup logging.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.theaters.len(), self.screenings.len())
    }
}
