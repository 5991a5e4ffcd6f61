//! Error types for the catalog crate.
//!
//! A load either succeeds with the rows it could keep or fails with a
//! [`CatalogError`] naming the file that broke. Row-level problems are
//! quarantined by the parser (skipped and logged) and never abort a load,
//! so callers can always tell "no data" apart from "load failed".

use thiserror::Error;

/// Errors that can occur while loading the CSV catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Backing file missing or unreadable
    #[error("failed to open {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file's header row could not be read as CSV
    #[error("malformed CSV in {file}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A row couldn't be parsed; carries enough context to find it
    #[error("parse error at line {line} in {file}: {reason}")]
    Row {
        file: String,
        line: usize,
        reason: String,
    },

    /// Background ingestion task died before producing a result
    #[error("ingestion task failed: {0}")]
    Task(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
