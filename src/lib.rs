//! Boardsweep: a paginated board listing scraper
//!
//! This crate scrapes a fixed bulletin-board listing: it discovers how many
//! pages the listing currently spans, fetches every page concurrently,
//! extracts one record per post row, and writes the merged result to a
//! single CSV file ordered by post number.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Boardsweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request for {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Landing page listed no post numbers")]
    NoPostNumbers,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid listing URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Boardsweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::ListingConfig;
pub use crawler::{scrape, Post};
