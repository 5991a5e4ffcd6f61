//! Populate-once store over the three collections.
//!
//! `CatalogStore` is owned by the serving context and injected wherever
//! the data is needed; there is no ambient global. Each collection has its
//! own cell, so e.g. a request for theaters never pays for parsing
//! screenings.
//!
//! Concurrency: `OnceCell::get_or_try_init` is the single-flight guard.
//! Concurrent first-accesses to one collection run at most one ingestion,
//! and every caller observes the same completed `Arc`. A failed ingestion
//! leaves the cell empty, so the next access retries instead of pinning an
//! error (or a silently empty collection) for the process lifetime.

use crate::error::{CatalogError, Result};
use crate::load::LoadSummary;
use crate::parser::{self, Parsed};
use crate::types::{Catalog, Movie, Screening, Theater};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task;

/// Lazily-populated, process-lifetime cache of the catalog collections.
#[derive(Debug)]
pub struct CatalogStore {
    data_dir: PathBuf,
    movies: OnceCell<Arc<Vec<Movie>>>,
    theaters: OnceCell<Arc<Vec<Theater>>>,
    screenings: OnceCell<Arc<Vec<Screening>>>,
}

impl CatalogStore {
    /// Create a store over a data directory containing the three CSVs.
    /// Nothing is read until a collection is first requested.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            movies: OnceCell::new(),
            theaters: OnceCell::new(),
            screenings: OnceCell::new(),
        }
    }

    /// All movies, ingesting movies.csv on first call.
    pub async fn movies(&self) -> Result<Arc<Vec<Movie>>> {
        self.collection(&self.movies, parser::MOVIES_FILE, parser::parse_movies)
            .await
    }

    /// All theaters, ingesting theaters.csv on first call.
    pub async fn theaters(&self) -> Result<Arc<Vec<Theater>>> {
        self.collection(&self.theaters, parser::THEATERS_FILE, parser::parse_theaters)
            .await
    }

    /// All screenings, ingesting screenings.csv on first call.
    pub async fn screenings(&self) -> Result<Arc<Vec<Screening>>> {
        self.collection(
            &self.screenings,
            parser::SCREENINGS_FILE,
            parser::parse_screenings,
        )
        .await
    }

    /// Eagerly populate every collection, parsing the three files in
    /// parallel. Cells already filled by a racing lazy access keep their
    /// earlier value.
    pub async fn load_all(&self) -> Result<LoadSummary> {
        let data_dir = self.data_dir.clone();
        let (catalog, summary) = task::spawn_blocking(move || Catalog::load_from_dir(&data_dir))
            .await
            .map_err(|err| CatalogError::Task(err.to_string()))??;

        let Catalog {
            movies,
            theaters,
            screenings,
        } = catalog;
        let _ = self.movies.set(Arc::new(movies));
        let _ = self.theaters.set(Arc::new(theaters));
        let _ = self.screenings.set(Arc::new(screenings));
        Ok(summary)
    }

    /// Single-flight populate of one cell. File I/O runs on the blocking
    /// pool so a slow disk only stalls requests that need this collection.
    async fn collection<T, F>(
        &self,
        cell: &OnceCell<Arc<Vec<T>>>,
        file: &'static str,
        parse: F,
    ) -> Result<Arc<Vec<T>>>
    where
        T: Send + Sync + 'static,
        F: FnOnce(&Path) -> Result<Parsed<T>> + Send + 'static,
    {
        let value = cell
            .get_or_try_init(|| async {
                let path = self.data_dir.join(file);
                let parsed = task::spawn_blocking(move || parse(&path))
                    .await
                    .map_err(|err| CatalogError::Task(err.to_string()))??;
                Ok::<_, CatalogError>(Arc::new(parsed.rows))
            })
            .await?;
        Ok(Arc::clone(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MOVIES_HEADER: &str =
        "id,title,director,duration,synopsis,posterUrl,genres,language,releaseYear\n";

    fn seed_data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(parser::MOVIES_FILE),
            format!(
                "{MOVIES_HEADER}movie1,Parasite,Bong Joon-ho,132,Class warfare.,/images/parasite.jpg,Thriller,Korean,2019\n"
            ),
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

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_access_is_single_flight() {
        let dir = seed_data_dir();
        let store = Arc::new(CatalogStore::new(dir.path()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.movies().await }));
        }

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap().unwrap());
        }

        // One ingestion means one allocation: every caller holds the same Arc.
        let first = &results[0];
        assert_eq!(first.len(), 1);
        for other in &results[1..] {
            assert!(Arc::ptr_eq(first, other));
        }
    }

    #[tokio::test]
    async fn collections_populate_once() {
        let dir = seed_data_dir();
        let store = CatalogStore::new(dir.path());

        let before = store.movies().await.unwrap();

        // Source changes are invisible for the rest of the process lifetime.
        fs::write(
            dir.path().join(parser::MOVIES_FILE),
            format!(
                "{MOVIES_HEADER}movie9,Replaced,Nobody,90,changed,/p.jpg,Drama,English,2001\n"
            ),
        )
        .unwrap();

        let after = store.movies().await.unwrap();
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(after[0].title, "Parasite");
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path());

        assert!(store.movies().await.is_err());

        // Once the file appears, the next access succeeds.
        fs::write(
            dir.path().join(parser::MOVIES_FILE),
            format!(
                "{MOVIES_HEADER}movie1,Parasite,Bong Joon-ho,132,ok,/p.jpg,Thriller,Korean,2019\n"
            ),
        )
        .unwrap();

        let movies = store.movies().await.unwrap();
        assert_eq!(movies.len(), 1);
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let dir = seed_data_dir();
        fs::remove_file(dir.path().join(parser::SCREENINGS_FILE)).unwrap();
        let store = CatalogStore::new(dir.path());

        // Theaters load fine even though screenings can't.
        assert_eq!(store.theaters().await.unwrap().len(), 1);
        assert!(store.screenings().await.is_err());
    }

    #[tokio::test]
    async fn load_all_populates_every_cell() {
        let dir = seed_data_dir();
        let store = CatalogStore::new(dir.path());

        let summary = store.load_all().await.unwrap();
        assert_eq!(summary.movies, 1);
        assert_eq!(summary.screenings, 1);

        // Accessors serve from memory now; removing the backing files
        // proves no re-read happens.
        for name in [
            parser::MOVIES_FILE,
            parser::THEATERS_FILE,
            parser::SCREENINGS_FILE,
        ] {
            fs::remove_file(dir.path().join(name)).unwrap();
        }
        assert_eq!(store.movies().await.unwrap().len(), 1);
        assert_eq!(store.theaters().await.unwrap().len(), 1);
        assert_eq!(store.screenings().await.unwrap().len(), 1);
    }
}
