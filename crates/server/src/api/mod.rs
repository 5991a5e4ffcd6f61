//! HTTP API handlers, one module per resource.

pub mod error;
pub mod health;
pub mod home;
pub mod movies;
pub mod screenings;
pub mod theaters;

pub use error::ApiError;
pub use health::health;
pub use home::home;
pub use movies::{get_movie, list_movies, movie_screenings};
pub use screenings::{list_screenings, screenings_by_date};
pub use theaters::{get_theater, list_theaters, theater_screenings};
