//! Core traits for the screening filter pipeline.
//!
//! This module defines the ScreeningFilter trait that allows composable,
//! extensible filters to be applied to a screening set.

use anyhow::Result;
use catalog::Screening;

/// Core trait for narrowing a screening set.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used from concurrent handlers
/// - Filters take ownership of the Vec<Screening> and return a filtered Vec,
///   so chains transform without extra cloning
pub trait ScreeningFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of screenings.
    ///
    /// Filters over well-typed screenings are total; the `Result` exists
    /// for the pipeline signature and future filters with fallible state.
    fn apply(&self, screenings: Vec<Screening>) -> Result<Vec<Screening>>;
}
