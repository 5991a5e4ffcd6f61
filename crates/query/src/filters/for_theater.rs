//! Filter screenings to one theater.

use crate::traits::ScreeningFilter;
use anyhow::Result;
use catalog::{Screening, TheaterId};

/// Keeps screenings whose venue reference equals the target id.
pub struct TheaterFilter {
    theater_id: TheaterId,
}

impl TheaterFilter {
    pub fn new(theater_id: impl Into<TheaterId>) -> Self {
        Self {
            theater_id: theater_id.into(),
        }
    }
}

impl ScreeningFilter for TheaterFilter {
    fn name(&self) -> &str {
        "TheaterFilter"
    }

    fn apply(&self, screenings: Vec<Screening>) -> Result<Vec<Screening>> {
        Ok(screenings
            .into_iter()
            .filter(|screening| screening.theater_id == self.theater_id)
            .collect())
    }
}
