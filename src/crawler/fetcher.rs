//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building the shared HTTP client with a proper user agent
//! - GET requests that produce a parsed document
//! - Bounded retry on transient failures

use crate::SweepError;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Builds the HTTP client shared by every fetch
///
/// # Arguments
///
/// * `user_agent` - The user agent string to send with every request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses the body into a queryable document
///
/// A failed attempt is any of: the request itself erroring, a non-success
/// status code, or the body failing to download. Each failure consumes one
/// unit of the retry budget and the next attempt starts immediately, with
/// no backoff. When the budget runs out the last error is returned.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `retries` - How many retries are allowed after the first attempt
///
/// # Returns
///
/// * `Ok(Html)` - The parsed document
/// * `Err(SweepError)` - The last error once the budget is exhausted
pub async fn fetch_document(client: &Client, url: &str, retries: u32) -> Result<Html, SweepError> {
    let mut remaining = retries;
    loop {
        match fetch_once(client, url).await {
            Ok(document) => return Ok(document),
            Err(error) => {
                if remaining == 0 {
                    return Err(error);
                }
                remaining -= 1;
                tracing::debug!("Retrying {} ({} retries left): {}", url, remaining, error);
            }
        }
    }
}

/// Performs a single fetch attempt
async fn fetch_once(client: &Client, url: &str) -> Result<Html, SweepError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| SweepError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SweepError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| SweepError::Http {
        url: url.to_string(),
        source,
    })?;

    // html5ever parsing is best effort and never fails outright
    Ok(Html::parse_document(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("boardsweep/test");
        assert!(client.is_ok());
    }
}
