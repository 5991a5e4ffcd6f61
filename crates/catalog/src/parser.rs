//! CSV readers for the three catalog files.
//!
//! Each backing file is a header-named CSV:
//! - movies.csv: id,title,director,duration,synopsis,posterUrl,genres,language,releaseYear
//! - theaters.csv: id,name,address,location_lat,location_lng,amenities
//! - screenings.csv: id,movieId,theaterId,screenId,startTime,endTime,format,specialEvent,ticketUrl
//!
//! List fields (`genres`, `amenities`) use comma as the in-field delimiter,
//! with no escaping scheme for embedded commas. Rows that fail coercion are
//! quarantined: skipped with a warning naming file, line, and reason. Only
//! file-level problems (missing file, broken header) fail the load.

use crate::error::{CatalogError, Result};
use crate::types::{Location, Movie, Screening, Theater};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// File name of the movie collection inside the data directory.
pub const MOVIES_FILE: &str = "movies.csv";
/// File name of the theater collection inside the data directory.
pub const THEATERS_FILE: &str = "theaters.csv";
/// File name of the screening collection inside the data directory.
pub const SCREENINGS_FILE: &str = "screenings.csv";

/// Rows kept from one file, plus how many were quarantined.
#[derive(Debug)]
pub struct Parsed<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

// =============================================================================
// Raw row shapes (exactly what the CSV headers name)
// =============================================================================

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    director: String,
    duration: String,
    synopsis: String,
    #[serde(rename = "posterUrl")]
    poster_url: String,
    genres: String,
    language: String,
    #[serde(rename = "releaseYear")]
    release_year: String,
}

#[derive(Debug, Deserialize)]
struct TheaterRow {
    id: String,
    name: String,
    address: String,
    location_lat: String,
    location_lng: String,
    amenities: String,
}

#[derive(Debug, Deserialize)]
struct ScreeningRow {
    id: String,
    #[serde(rename = "movieId")]
    movie_id: String,
    #[serde(rename = "theaterId")]
    theater_id: String,
    #[serde(rename = "screenId")]
    screen_id: String,
    #[serde(rename = "startTime")]
    start_time: String,
    #[serde(rename = "endTime")]
    end_time: String,
    format: String,
    #[serde(rename = "specialEvent")]
    special_event: String,
    #[serde(rename = "ticketUrl")]
    ticket_url: String,
}

// =============================================================================
// Per-file parse functions
// =============================================================================

/// Parse movies.csv into typed records.
pub fn parse_movies(path: &Path) -> Result<Parsed<Movie>> {
    read_rows(path, MOVIES_FILE, movie_from_row, movie_id)
}

/// Parse theaters.csv into typed records.
pub fn parse_theaters(path: &Path) -> Result<Parsed<Theater>> {
    read_rows(path, THEATERS_FILE, theater_from_row, theater_id)
}

/// Parse screenings.csv into typed records.
///
/// Foreign keys are taken verbatim; a screening referencing a movie or
/// theater that doesn't exist still loads.
pub fn parse_screenings(path: &Path) -> Result<Parsed<Screening>> {
    read_rows(path, SCREENINGS_FILE, screening_from_row, screening_id)
}

fn movie_id(movie: &Movie) -> &str {
    &movie.id
}

fn theater_id(theater: &Theater) -> &str {
    &theater.id
}

fn screening_id(screening: &Screening) -> &str {
    &screening.id
}

/// Shared read loop: open the file, then convert records one by one,
/// quarantining rows that fail coercion or repeat an already-seen id.
fn read_rows<R, T, F, G>(
    path: &Path,
    file: &'static str,
    convert: F,
    id_of: G,
) -> Result<Parsed<T>>
where
    R: DeserializeOwned,
    F: Fn(R, usize) -> Result<T>,
    G: Fn(&T) -> &str,
{
    let handle = File::open(path).map_err(|source| CatalogError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(handle);

    // A broken header is a file-level failure, not row noise.
    reader
        .headers()
        .map_err(|source| CatalogError::Csv {
            file: file.to_string(),
            source,
        })?;

    let mut rows: Vec<T> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut skipped = 0usize;

    for (idx, record) in reader.deserialize::<R>().enumerate() {
        // Header occupies line 1; blank lines are already dropped by the reader.
        let line = idx + 2;

        let raw = match record {
            Ok(raw) => raw,
            Err(err) => {
                warn!(file, line, reason = %err, "quarantined unreadable row");
                skipped += 1;
                continue;
            }
        };

        match convert(raw, line) {
            Ok(row) => {
                let id = id_of(&row);
                if seen_ids.contains(id) {
                    warn!(file, line, id, "quarantined row with duplicate id");
                    skipped += 1;
                } else {
                    seen_ids.insert(id.to_string());
                    rows.push(row);
                }
            }
            Err(err) => {
                warn!(file, line, reason = %err, "quarantined malformed row");
                skipped += 1;
            }
        }
    }

    debug!(file, rows = rows.len(), skipped, "parsed catalog file");
    Ok(Parsed { rows, skipped })
}

// =============================================================================
// Row conversion (field coercion)
// =============================================================================

fn movie_from_row(row: MovieRow, line: usize) -> Result<Movie> {
    Ok(Movie {
        duration: parse_u32(&row.duration, "duration", MOVIES_FILE, line)?,
        release_year: parse_i32(&row.release_year, "releaseYear", MOVIES_FILE, line)?,
        genres: split_list(&row.genres),
        id: row.id,
        title: row.title,
        director: row.director,
        synopsis: row.synopsis,
        poster_url: row.poster_url,
        language: row.language,
    })
}

fn theater_from_row(row: TheaterRow, line: usize) -> Result<Theater> {
    Ok(Theater {
        location: Location {
            lat: parse_f64(&row.location_lat, "location_lat", THEATERS_FILE, line)?,
            lng: parse_f64(&row.location_lng, "location_lng", THEATERS_FILE, line)?,
        },
        amenities: split_list(&row.amenities),
        id: row.id,
        name: row.name,
        address: row.address,
    })
}

fn screening_from_row(row: ScreeningRow, line: usize) -> Result<Screening> {
    Ok(Screening {
        start_time: parse_timestamp(&row.start_time, "startTime", SCREENINGS_FILE, line)?,
        end_time: parse_timestamp(&row.end_time, "endTime", SCREENINGS_FILE, line)?,
        special_event: parse_bool(&row.special_event),
        id: row.id,
        movie_id: row.movie_id,
        theater_id: row.theater_id,
        screen_id: row.screen_id,
        format: row.format,
        ticket_url: row.ticket_url,
    })
}

// =============================================================================
// Coercion helpers
// =============================================================================

fn parse_u32(s: &str, field: &str, file: &str, line: usize) -> Result<u32> {
    s.trim().parse().map_err(|_| CatalogError::Row {
        file: file.to_string(),
        line,
        reason: format!("invalid {field}: {s:?}"),
    })
}

fn parse_i32(s: &str, field: &str, file: &str, line: usize) -> Result<i32> {
    s.trim().parse().map_err(|_| CatalogError::Row {
        file: file.to_string(),
        line,
        reason: format!("invalid {field}: {s:?}"),
    })
}

fn parse_f64(s: &str, field: &str, file: &str, line: usize) -> Result<f64> {
    s.trim().parse().map_err(|_| CatalogError::Row {
        file: file.to_string(),
        line,
        reason: format!("invalid {field}: {s:?}"),
    })
}

/// Accepts RFC 3339 ("2024-03-10T19:00:00Z") or a bare naive datetime.
/// Offsets are dropped: the written wall-clock value is kept as-is, since
/// the whole system compares timezone-naive calendar days.
fn parse_timestamp(s: &str, field: &str, file: &str, line: usize) -> Result<NaiveDateTime> {
    let raw = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    Err(CatalogError::Row {
        file: file.to_string(),
        line,
        reason: format!("invalid {field} timestamp: {s:?}"),
    })
}

/// Comma-split list field. An empty field is an empty list, not `[""]`.
fn split_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',').map(str::to_string).collect()
}

/// Case-insensitive comparison against the literal "true"; anything else
/// is false.
fn parse_bool(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("true")
}
