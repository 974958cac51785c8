//! Crawler module for listing scraping
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with bounded retry
//! - Pagination boundary discovery
//! - Per-row post extraction
//! - Concurrent page aggregation and reassembly

mod aggregator;
mod boundary;
mod extractor;
mod fetcher;

pub use aggregator::{fetch_all_pages, reassemble};
pub use boundary::{find_last_page, page_estimate, page_has_posts, read_max_post_number};
pub use extractor::{extract_posts, Post};
pub use fetcher::{build_http_client, fetch_document};

use crate::config::ListingConfig;
use crate::output::write_posts;
use crate::SweepError;
use std::time::Instant;

/// Runs a complete scrape of the configured listing
///
/// This is the main entry point. It will:
/// 1. Build the shared HTTP client
/// 2. Discover the last populated page
/// 3. Fetch and extract every page concurrently
/// 4. Sort the merged posts by post number
/// 5. Write the CSV output
///
/// # Arguments
///
/// * `config` - The listing configuration
///
/// # Returns
///
/// * `Ok(())` - Scrape completed and the CSV was written
/// * `Err(SweepError)` - Scrape failed before producing output
pub async fn scrape(config: ListingConfig) -> Result<(), SweepError> {
    let start = Instant::now();
    let client = build_http_client(&config.user_agent)?;

    let last_page = find_last_page(&client, &config).await?;
    tracing::info!("{} pages found", last_page);

    let posts = fetch_all_pages(&client, &config, last_page).await;
    let dataset = reassemble(posts);

    write_posts(&config.output_path, &dataset)?;
    tracing::info!(
        "Wrote {} posts to {} in {:.2?}",
        dataset.len(),
        config.output_path.display(),
        start.elapsed()
    );

    Ok(())
}
