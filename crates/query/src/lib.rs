//! Query operations over the loaded catalog.
//!
//! This crate provides:
//! - Identifier lookup over any entity collection
//! - ScreeningFilter trait and implementations for narrowing screenings
//! - FilterPipeline for composing filters
//! - Grouping helpers for the showtime listings (by date, by theater)
//! - Free-text movie search
//!
//! ## Architecture
//! Every operation here is a pure function over slices the store hands
//! out: nothing is mutated, nothing suspends, and "not found" is an
//! absence rather than an error.
//!
//! ## Example Usage
//! ```ignore
//! use query::{find_by_id, FilterPipeline};
//! use query::filters::{DateFilter, TheaterFilter};
//!
//! // Narrow screenings to one theater on one day
//! let pipeline = FilterPipeline::new()
//!     .add_filter(DateFilter::new(date))
//!     .add_filter(TheaterFilter::new("siff-egyptian"));
//! let todays = pipeline.apply(screenings.to_vec())?;
//!
//! // Then bucket them for display
//! let by_date = query::grouping::group_by_date(&todays);
//! ```

pub mod dates;
pub mod filter_pipeline;
pub mod filters;
pub mod grouping;
pub mod lookup;
pub mod search;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use lookup::{find_by_id, Identified};
pub use search::search_movies;
pub use traits::ScreeningFilter;
