//! Filter implementations for the screening pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod by_date;
pub mod for_movie;
pub mod for_theater;

// Re-export for convenience
pub use by_date::DateFilter;
pub use for_movie::MovieFilter;
pub use for_theater::TheaterFilter;
