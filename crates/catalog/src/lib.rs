//! # Catalog Crate
//!
//! This crate handles loading and caching the CSV-backed screening catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Theater, Screening, Catalog)
//! - **parser**: Parse the CSV files into typed records, quarantining bad rows
//! - **load**: Eager three-file load with a summary
//! - **store**: Populate-once, single-flight cache over the collections
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogStore;
//!
//! // Lazy, cached access (the server path)
//! let store = CatalogStore::new("data/csv");
//! let movies = store.movies().await?;
//! println!("{} movies in the catalog", movies.len());
//!
//! // Eager access (the CLI path)
//! let (catalog, summary) = catalog::Catalog::load_from_dir(Path::new("data/csv"))?;
//! println!("{} screenings loaded", summary.screenings);
//! ```
//!
//! Collections are immutable once loaded and live for the rest of the
//! process; restarting is the only way to pick up source changes.

// Public modules
pub mod error;
pub mod load;
pub mod parser;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use load::LoadSummary;
pub use store::CatalogStore;
pub use types::{
    // Type aliases
    MovieId,
    ScreeningId,
    TheaterId,
    // Core types
    Catalog,
    Location,
    Movie,
    Screening,
    Theater,
};
