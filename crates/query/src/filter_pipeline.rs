//! The FilterPipeline chains multiple screening filters.

use crate::traits::ScreeningFilter;
use anyhow::Result;
use catalog::Screening;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DateFilter::new(date))
///     .add_filter(MovieFilter::new("movie3"));
///
/// let narrowed = pipeline.apply(screenings)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn ScreeningFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ScreeningFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the screenings.
    ///
    /// Each stage logs its name and in/out counts at debug level, which is
    /// usually all the tracing a misbehaving listing page needs.
    pub fn apply(&self, screenings: Vec<Screening>) -> Result<Vec<Screening>> {
        let mut current = screenings;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current)?;
            debug!(
                filter = filter.name(),
                input = before,
                output = current.len(),
                "applied screening filter"
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
