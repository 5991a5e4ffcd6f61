//! Free-text movie search.

use catalog::Movie;

/// Case-insensitive substring search across a movie's text fields.
///
/// The trimmed query is matched against title, director, synopsis,
/// language, each genre, and the release year as decimal text; any single
/// hit keeps the movie. A blank query yields no results rather than the
/// whole catalog, and result order is source collection order — there is
/// no ranking.
pub fn search_movies<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    movies
        .iter()
        .filter(|movie| movie_matches(movie, &term))
        .collect()
}

fn movie_matches(movie: &Movie, term: &str) -> bool {
    movie.title.to_lowercase().contains(term)
        || movie.director.to_lowercase().contains(term)
        || movie.synopsis.to_lowercase().contains(term)
        || movie.language.to_lowercase().contains(term)
        || movie
            .genres
            .iter()
            .any(|genre| genre.to_lowercase().contains(term))
        || movie.release_year.to_string().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, director: &str, genres: &[&str], year: i32) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            director: director.to_string(),
            duration: 120,
            synopsis: format!("A film called {title}."),
            poster_url: format!("/images/{id}.jpg"),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            language: "Korean".to_string(),
            release_year: year,
        }
    }

    fn sample() -> Vec<Movie> {
        vec![
            movie("movie1", "Parasite", "Bong Joon-ho", &["Thriller", "Drama"], 2019),
            movie("movie2", "Moonlight", "Barry Jenkins", &["Drama"], 2016),
        ]
    }

    #[test]
    fn blank_queries_yield_nothing() {
        let movies = sample();
        assert!(search_movies(&movies, "").is_empty());
        assert!(search_movies(&movies, "   ").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let movies = sample();
        let upper = search_movies(&movies, "PARASITE");
        let lower = search_movies(&movies, "parasite");
        assert_eq!(upper, lower);
        assert_eq!(upper[0].id, "movie1");
    }

    #[test]
    fn matches_any_field() {
        let movies = sample();
        assert_eq!(search_movies(&movies, "jenkins")[0].id, "movie2");
        assert_eq!(search_movies(&movies, "thriller")[0].id, "movie1");
        assert_eq!(search_movies(&movies, "2016")[0].id, "movie2");
        // Both synopses contain "film"; source order is preserved.
        let all = search_movies(&movies, "film");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "movie1");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let movies = sample();
        assert!(search_movies(&movies, "westerns about tax law").is_empty());
    }
}
