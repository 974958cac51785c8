//! Pagination boundary discovery
//!
//! The listing reports its newest post number on the landing page, which
//! gives an upper bound on the page count. Deleted posts leave gaps in the
//! numbering, so the last pages implied by that bound may not exist; pages
//! themselves are never sparse, so the true boundary is the first populated
//! page found scanning downward from the estimate.

use crate::config::ListingConfig;
use crate::crawler::fetcher::fetch_document;
use crate::SweepError;
use reqwest::Client;
use scraper::{Html, Selector};

/// Finds the highest page index that still contains posts
///
/// Fetches the landing page, reads the newest post number from the listing
/// summary, and probes page indices downward from the resulting estimate.
/// Returns 0 when every probed page is empty.
///
/// Any fetch that exhausts its retry budget here is fatal: without the
/// landing page there is no scan range, and an unreachable probe cannot be
/// told apart from a page past the end of the listing.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The listing configuration
///
/// # Returns
///
/// * `Ok(page)` - The last populated page index, or 0 for an empty listing
/// * `Err(SweepError)` - A fetch failed or the summary was missing
pub async fn find_last_page(client: &Client, config: &ListingConfig) -> Result<u32, SweepError> {
    let estimate = {
        let landing = fetch_document(client, config.landing_url(), config.fetch_retries).await?;
        let max_number = read_max_post_number(&landing)?;
        let estimate = page_estimate(max_number, config.page_size);
        tracing::debug!(
            "Newest post is {}, scanning down from page {}",
            max_number,
            estimate
        );
        estimate
    };

    for page in (1..=estimate).rev() {
        let document = fetch_document(client, &config.page_url(page), config.fetch_retries).await?;
        if page_has_posts(&document) {
            return Ok(page);
        }
        tracing::debug!("Page {} is empty, probing lower", page);
    }

    Ok(0)
}

/// Reads the newest post number from the landing page summary
///
/// The listing shows posts newest first, so the first number cell of the
/// post rows carries the highest number currently in the listing. A landing
/// page without one cannot be scraped at all.
pub fn read_max_post_number(document: &Html) -> Result<u64, SweepError> {
    let selector = Selector::parse("tbody tr.lgtm td.num span")
        .map_err(|_| SweepError::NoPostNumbers)?;

    document
        .select(&selector)
        .next()
        .and_then(|cell| cell.text().collect::<String>().trim().parse().ok())
        .ok_or(SweepError::NoPostNumbers)
}

/// Computes the upper-bound page estimate for a given newest post number
pub fn page_estimate(max_number: u64, page_size: u32) -> u32 {
    ((max_number + u64::from(page_size) - 1) / u64::from(page_size)) as u32
}

/// Checks whether a fetched page contains any post rows
///
/// A page is empty when it carries the explicit no-result marker or when
/// its listing body has no rows at all.
pub fn page_has_posts(document: &Html) -> bool {
    if let Ok(marker) = Selector::parse("div.board-list table tbody tr td div.no-result") {
        if document.select(&marker).next().is_some() {
            return false;
        }
    }

    if let Ok(rows) = Selector::parse("div.board-list table tbody tr") {
        document.select(&rows).next().is_some()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_estimate_rounds_up() {
        assert_eq!(page_estimate(301, 30), 11);
        assert_eq!(page_estimate(299, 30), 10);
    }

    #[test]
    fn test_page_estimate_exact_multiple() {
        assert_eq!(page_estimate(300, 30), 10);
    }

    #[test]
    fn test_page_estimate_single_post() {
        assert_eq!(page_estimate(1, 30), 1);
    }

    #[test]
    fn test_read_max_post_number() {
        let html = r#"
            <div class="board-list"><table><tbody>
                <tr class="lgtm"><td class="num"><span>301</span></td></tr>
                <tr class="lgtm"><td class="num"><span>300</span></td></tr>
            </tbody></table></div>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(read_max_post_number(&document).unwrap(), 301);
    }

    #[test]
    fn test_read_max_post_number_missing_summary() {
        let document = Html::parse_document("<html><body></body></html>");
        assert!(matches!(
            read_max_post_number(&document),
            Err(SweepError::NoPostNumbers)
        ));
    }

    #[test]
    fn test_page_with_rows_has_posts() {
        let html = r#"
            <div class="board-list"><table><tbody>
                <tr><td class="num"><span>5</span></td></tr>
            </tbody></table></div>
        "#;
        assert!(page_has_posts(&Html::parse_document(html)));
    }

    #[test]
    fn test_no_result_marker_means_empty() {
        let html = r#"
            <div class="board-list"><table><tbody>
                <tr><td><div class="no-result">no posts</div></td></tr>
            </tbody></table></div>
        "#;
        assert!(!page_has_posts(&Html::parse_document(html)));
    }

    #[test]
    fn test_page_without_listing_body_is_empty() {
        let document = Html::parse_document("<html><body><p>gone</p></body></html>");
        assert!(!page_has_posts(&document));
    }
}
