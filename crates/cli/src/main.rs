use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;

use catalog::{Catalog, Movie, Screening};
use query::dates::parse_query_date;
use query::filters::{DateFilter, MovieFilter, TheaterFilter};
use query::grouping;
use query::{find_by_id, search_movies, FilterPipeline};

/// Marquee - terminal browser for the screening catalog
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse movies, theaters, and screenings from the CSV catalog", long_about = None)]
struct Cli {
    /// Path to the directory holding the catalog CSV files
    #[arg(short, long, default_value = "data/csv")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in the catalog
    Movies,

    /// List every theater in the catalog
    Theaters,

    /// Show one movie with its upcoming showtimes
    Movie {
        /// Movie ID to display
        #[arg(long)]
        id: String,
    },

    /// Show one theater with its upcoming showtimes
    Theater {
        /// Theater ID to display
        #[arg(long)]
        id: String,
    },

    /// List one day's screenings, grouped by theater
    Screenings {
        /// Date to list, e.g. 2024-03-10 (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Search movies across title, director, synopsis, genre, language, and year
    Search {
        /// Search term (case-insensitive substring match)
        #[arg(long)]
        query: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing; quarantine warnings from the parser land here
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load the full catalog up front (this is quick for CSV-sized data)
    println!("Loading catalog from {}...", cli.data_dir.display());
    let start = Instant::now();
    let (catalog, summary) =
        Catalog::load_from_dir(&cli.data_dir).context("Failed to load catalog")?;
    println!(
        "{} Loaded {} movies, {} theaters, {} screenings in {:?}",
        "✓".green(),
        summary.movies,
        summary.theaters,
        summary.screenings,
        start.elapsed()
    );
    if summary.skipped_rows > 0 {
        println!(
            "{} {} malformed rows were skipped (see warnings above)",
            "!".yellow(),
            summary.skipped_rows
        );
    }
    println!();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Movies => handle_movies(&catalog),
        Commands::Theaters => handle_theaters(&catalog),
        Commands::Movie { id } => handle_movie(&catalog, &id)?,
        Commands::Theater { id } => handle_theater(&catalog, &id)?,
        Commands::Screenings { date } => handle_screenings(&catalog, date.as_deref())?,
        Commands::Search { query } => handle_search(&catalog, &query),
    }

    Ok(())
}

/// Handle the 'movies' command
fn handle_movies(catalog: &Catalog) {
    println!("{}", "Movies".bold().underline());
    for movie in &catalog.movies {
        print_movie_line(movie);
    }
}

/// Handle the 'theaters' command
fn handle_theaters(catalog: &Catalog) {
    println!("{}", "Theaters".bold().underline());
    for theater in &catalog.theaters {
        println!(
            "{:14} {} - {}",
            theater.id.dimmed(),
            theater.name.bold(),
            theater.address
        );
        if !theater.amenities.is_empty() {
            println!("{:14} {}", "", theater.amenities.join(", ").italic());
        }
    }
}

/// Handle the 'movie' command
fn handle_movie(catalog: &Catalog, id: &str) -> Result<()> {
    let movie =
        find_by_id(&catalog.movies, id).ok_or_else(|| anyhow!("Movie {} not found", id))?;

    println!("{}", movie.title.bold().blue());
    println!("Directed by {} ({})", movie.director, movie.release_year);
    println!(
        "{} min | {} | {}",
        movie.duration,
        movie.language,
        movie.genres.join(", ")
    );
    println!("{}", movie.synopsis);
    println!();

    // Showtimes, chronological and bucketed by day
    let pipeline = FilterPipeline::new().add_filter(MovieFilter::new(id));
    let showtimes = grouping::sort_by_start_time(pipeline.apply(catalog.screenings.clone())?);

    if showtimes.is_empty() {
        println!("No upcoming screenings scheduled for this movie.");
        return Ok(());
    }

    println!("{}", "Upcoming Screenings".bold().underline());
    for (day, screenings) in grouping::group_by_date(&showtimes) {
        println!("{}", day.bold());
        for screening in screenings {
            let theater = find_by_id(&catalog.theaters, &screening.theater_id)
                .map(|t| t.name.as_str())
                .unwrap_or("(unknown theater)");
            print_screening_line(&screening, theater);
        }
    }
    Ok(())
}

/// Handle the 'theater' command
fn handle_theater(catalog: &Catalog, id: &str) -> Result<()> {
    let theater =
        find_by_id(&catalog.theaters, id).ok_or_else(|| anyhow!("Theater {} not found", id))?;

    println!("{}", theater.name.bold().blue());
    println!("{}", theater.address);
    println!(
        "lat {:.4}, lng {:.4}",
        theater.location.lat, theater.location.lng
    );
    if !theater.amenities.is_empty() {
        println!("{}", theater.amenities.join(", ").italic());
    }
    println!();

    let pipeline = FilterPipeline::new().add_filter(TheaterFilter::new(id));
    let showtimes = grouping::sort_by_start_time(pipeline.apply(catalog.screenings.clone())?);

    if showtimes.is_empty() {
        println!("No upcoming screenings scheduled at this theater.");
        return Ok(());
    }

    println!("{}", "Upcoming Screenings".bold().underline());
    for (day, screenings) in grouping::group_by_date(&showtimes) {
        println!("{}", day.bold());
        for screening in screenings {
            let movie = find_by_id(&catalog.movies, &screening.movie_id)
                .map(|m| m.title.as_str())
                .unwrap_or(screening.movie_id.as_str());
            print_screening_line(&screening, movie);
        }
    }
    Ok(())
}

/// Handle the 'screenings' command
fn handle_screenings(catalog: &Catalog, date: Option<&str>) -> Result<()> {
    let day = match date {
        Some(raw) => parse_query_date(raw).ok_or_else(|| anyhow!("Invalid date: {}", raw))?,
        None => Local::now().date_naive(),
    };

    let pipeline = FilterPipeline::new().add_filter(DateFilter::new(day));
    let on_date = grouping::sort_by_start_time(pipeline.apply(catalog.screenings.clone())?);

    println!(
        "{} - {} screenings",
        grouping::date_label(day).bold().underline(),
        on_date.len()
    );
    if on_date.is_empty() {
        return Ok(());
    }

    for (_, group) in grouping::group_by_theater(&on_date, &catalog.theaters) {
        let heading = match &group.theater {
            Some(theater) => theater.name.clone(),
            None => "Unknown theater".to_string(),
        };
        println!("{}", heading.bold());
        for screening in &group.screenings {
            let movie = find_by_id(&catalog.movies, &screening.movie_id)
                .map(|m| m.title.as_str())
                .unwrap_or(screening.movie_id.as_str());
            print_screening_line(screening, movie);
        }
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str) {
    let results = search_movies(&catalog.movies, query);

    if query.trim().is_empty() {
        println!("Please enter a search term to find movies.");
        return;
    }

    println!(
        "Found {} result{} for \"{}\"",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query
    );
    for movie in results {
        print_movie_line(movie);
    }
}

fn print_movie_line(movie: &Movie) {
    println!(
        "{:10} {} ({}) - {}, {} min",
        movie.id.dimmed(),
        movie.title.bold(),
        movie.release_year,
        movie.genres.join("/"),
        movie.duration
    );
}

fn print_screening_line(screening: &Screening, heading: &str) {
    let time = screening.start_time.format("%-I:%M %p");
    let mut tags = vec![screening.format.clone()];
    if screening.special_event {
        tags.push("Special Event".to_string());
    }
    println!(
        "  {} {} [{}] {}",
        time.to_string().cyan(),
        heading,
        tags.join(", "),
        screening.screen_id.dimmed()
    );
}
