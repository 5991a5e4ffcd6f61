//! Eager catalog loading.
//!
//! The CLI and the server's preload path read all three files up front.
//! The three parses are independent, so they run in parallel with nested
//! `rayon::join`.

use crate::error::Result;
use crate::parser;
use crate::types::Catalog;
use std::path::Path;
use tracing::info;

/// Per-collection counts from one eager load.
#[derive(Debug, Clone, Copy)]
pub struct LoadSummary {
    pub movies: usize,
    pub theaters: usize,
    pub screenings: usize,
    /// Rows quarantined across all three files
    pub skipped_rows: usize,
}

impl Catalog {
    /// Read movies.csv, theaters.csv, and screenings.csv from `data_dir`
    /// and build the full in-memory catalog.
    ///
    /// Fails only on file-level problems; quarantined rows are reported in
    /// the summary and logged by the parser.
    pub fn load_from_dir(data_dir: &Path) -> Result<(Self, LoadSummary)> {
        let movies_path = data_dir.join(parser::MOVIES_FILE);
        let theaters_path = data_dir.join(parser::THEATERS_FILE);
        let screenings_path = data_dir.join(parser::SCREENINGS_FILE);

        // Nested join gives three-way parallelism across the files.
        let ((movies, theaters), screenings) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_movies(&movies_path),
                    || parser::parse_theaters(&theaters_path),
                )
            },
            || parser::parse_screenings(&screenings_path),
        );

        let movies = movies?;
        let theaters = theaters?;
        let screenings = screenings?;

        let summary = LoadSummary {
            movies: movies.rows.len(),
            theaters: theaters.rows.len(),
            screenings: screenings.rows.len(),
            skipped_rows: movies.skipped + theaters.skipped + screenings.skipped,
        };

        info!(
            movies = summary.movies,
            theaters = summary.theaters,
            screenings = summary.screenings,
            skipped_rows = summary.skipped_rows,
            "loaded catalog from {}",
            data_dir.display()
        );

        let catalog = Catalog {
            movies: movies.rows,
            theaters: theaters.rows,
            screenings: screenings.rows,
        };
        Ok((catalog, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::fs;
    use tempfile::TempDir;

    fn seed_data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(parser::MOVIES_FILE),
            "id,title,director,duration,synopsis,posterUrl,genres,language,releaseYear\n\
             movie1,Parasite,Bong Joon-ho,132,Class warfare.,/images/parasite.jpg,\"Thriller,Drama\",Korean,2019\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(parser::THEATERS_FILE),
            "id,name,address,location_lat,location_lng,amenities\n\
             siff-uptown,SIFF Cinema Uptown,511 Queen Anne Ave N,47.6249,-122.3561,Concessions\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(parser::SCREENINGS_FILE),
            "id,movieId,theaterId,screenId,startTime,endTime,format,specialEvent,ticketUrl\n\
             s1,movie1,siff-uptown,screen-1,2024-03-10T19:00:00,2024-03-10T21:12:00,Digital,false,https://t.example.com/s1\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn loads_all_three_collections() {
        let dir = seed_data_dir();
        let (catalog, summary) = Catalog::load_from_dir(dir.path()).unwrap();

        assert_eq!(catalog.counts(), (1, 1, 1));
        assert_eq!(summary.movies, 1);
        assert_eq!(summary.skipped_rows, 0);
    }

    #[test]
    fn missing_file_fails_the_eager_load() {
        let dir = seed_data_dir();
        fs::remove_file(dir.path().join(parser::SCREENINGS_FILE)).unwrap();

        let err = Catalog::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Open { .. }));
    }
}
