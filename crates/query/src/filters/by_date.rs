//! Filter screenings to a single calendar day.

use crate::dates;
use crate::traits::ScreeningFilter;
use anyhow::Result;
use catalog::Screening;
use chrono::NaiveDate;

/// Keeps screenings whose start time falls on the target calendar day,
/// using the canonical comparison in [`crate::dates`].
pub struct DateFilter {
    date: NaiveDate,
}

impl DateFilter {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl ScreeningFilter for DateFilter {
    fn name(&self) -> &str {
        "DateFilter"
    }

    fn apply(&self, screenings: Vec<Screening>) -> Result<Vec<Screening>> {
        Ok(screenings
            .into_iter()
            .filter(|screening| dates::matches_date(screening, self.date))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screening_at(id: &str, start: &str) -> Screening {
        let start = chrono::NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M:%S").unwrap();
        Screening {
            id: id.to_string(),
            movie_id: "movie1".to_string(),
            theater_id: "siff-uptown".to_string(),
            screen_id: "screen-1".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::minutes(132),
            format: "Digital".to_string(),
            special_event: false,
            ticket_url: "https://t.example.com/s".to_string(),
        }
    }

    #[test]
    fn keeps_only_matching_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let screenings = vec![
            screening_at("s1", "2024-03-10T19:00:00"),
            screening_at("s2", "2024-03-11T00:00:00"),
            screening_at("s3", "2024-03-10T00:00:00"),
        ];

        let kept = DateFilter::new(day).apply(screenings).unwrap();
        let ids: Vec<&str> = kept.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let filter = DateFilter::new(day);
        let screenings = vec![
            screening_at("s1", "2024-03-10T19:00:00"),
            screening_at("s2", "2024-03-11T19:00:00"),
        ];

        let once = filter.apply(screenings).unwrap();
        let twice = filter.apply(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
