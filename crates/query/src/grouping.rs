//! Grouping helpers for showtime listings.
//!
//! The movie and theater pages list screenings bucketed by calendar day;
//! the screenings page buckets one day's screenings by venue. Both
//! groupings preserve first-seen order, so a pre-sorted input renders
//! chronologically.

use crate::lookup::find_by_id;
use catalog::{Screening, Theater};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// Bucket key for screenings whose theater id resolves to nothing.
pub const UNKNOWN_THEATER_KEY: &str = "unknown";

/// Sort screenings chronologically by start time.
pub fn sort_by_start_time(mut screenings: Vec<Screening>) -> Vec<Screening> {
    screenings.sort_by_key(|screening| screening.start_time);
    screenings
}

/// Human-readable calendar-day label, e.g. "Sunday, March 10, 2024".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Bucket screenings by their calendar-day label, preserving first-seen
/// label order. Input is expected to already be time-sorted.
pub fn group_by_date(screenings: &[Screening]) -> IndexMap<String, Vec<Screening>> {
    let mut groups: IndexMap<String, Vec<Screening>> = IndexMap::new();
    for screening in screenings {
        groups
            .entry(date_label(screening.start_time.date()))
            .or_default()
            .push(screening.clone());
    }
    groups
}

/// One venue's slice of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct TheaterGroup {
    /// `None` when the screenings reference a theater that doesn't exist
    pub theater: Option<Theater>,
    pub screenings: Vec<Screening>,
}

/// Bucket screenings by venue. Screenings with a dangling theater id all
/// land under [`UNKNOWN_THEATER_KEY`] with no theater attached.
pub fn group_by_theater(
    screenings: &[Screening],
    theaters: &[Theater],
) -> IndexMap<String, TheaterGroup> {
    let mut groups: IndexMap<String, TheaterGroup> = IndexMap::new();
    for screening in screenings {
        let theater = find_by_id(theaters, &screening.theater_id);
        let key = match theater {
            Some(theater) => theater.id.clone(),
            None => UNKNOWN_THEATER_KEY.to_string(),
        };
        groups
            .entry(key)
            .or_insert_with(|| TheaterGroup {
                theater: theater.cloned(),
                screenings: Vec::new(),
            })
            .screenings
            .push(screening.clone());
    }
    groups
}
