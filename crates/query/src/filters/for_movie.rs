//! Filter screenings to one movie.

use crate::traits::ScreeningFilter;
use anyhow::Result;
use catalog::{MovieId, Screening};

/// Keeps screenings whose movie reference equals the target id.
///
/// A dangling or unknown id just produces an empty result; the filter
/// never checks the movie collection.
pub struct MovieFilter {
    movie_id: MovieId,
}

impl MovieFilter {
    pub fn new(movie_id: impl Into<MovieId>) -> Self {
        Self {
            movie_id: movie_id.into(),
        }
    }
}

impl ScreeningFilter for MovieFilter {
    fn name(&self) -> &str {
        "MovieFilter"
    }

    fn apply(&self, screenings: Vec<Screening>) -> Result<Vec<Screening>> {
        Ok(screenings
            .into_iter()
            .filter(|screening| screening.movie_id == self.movie_id)
            .collect())
    }
}
