//! Concurrent page fetching and reassembly
//!
//! One task is spawned per page and every task reports exactly once on a
//! shared channel, successfully or not. The receive loop therefore acts as
//! a barrier: after `last_page` receives, every page has been accounted
//! for. Arrival order is whatever the network produced and carries no
//! meaning; ordering is restored afterwards by sorting on the post number,
//! which is unique across the whole listing.

use crate::config::ListingConfig;
use crate::crawler::extractor::{extract_posts, Post};
use crate::crawler::fetcher::fetch_document;
use reqwest::Client;
use tokio::sync::mpsc;

/// Fetches and extracts every page from 1 to `last_page` concurrently
///
/// A page whose fetch exhausts the retry budget is logged and contributes
/// an empty batch; the run carries on with the pages that did succeed.
///
/// # Arguments
///
/// * `client` - The HTTP client shared by all page tasks
/// * `config` - The listing configuration
/// * `last_page` - The boundary found by the scan phase
///
/// # Returns
///
/// All extracted posts, concatenated in arrival order
pub async fn fetch_all_pages(
    client: &Client,
    config: &ListingConfig,
    last_page: u32,
) -> Vec<Post> {
    let (tx, mut rx) = mpsc::channel::<Vec<Post>>(1);

    for page in 1..=last_page {
        let tx = tx.clone();
        let client = client.clone();
        let url = config.page_url(page);
        let retries = config.fetch_retries;

        tokio::spawn(async move {
            tracing::debug!("Requesting page {} from {}", page, url);
            let batch = match fetch_document(&client, &url, retries).await {
                Ok(document) => extract_posts(&document),
                Err(error) => {
                    tracing::warn!("Giving up on page {} ({}): {}", page, url, error);
                    Vec::new()
                }
            };
            let _ = tx.send(batch).await;
        });
    }
    drop(tx);

    let mut posts = Vec::new();
    let mut received = 0;
    while received < last_page {
        match rx.recv().await {
            Some(batch) => {
                posts.extend(batch);
                received += 1;
            }
            None => break,
        }
    }

    posts
}

/// Restores the listing's total order over the merged batches
///
/// Post numbers are unique, so an unstable sort is enough.
pub fn reassemble(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_unstable_by_key(|post| post.number);
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(number: u64) -> Post {
        Post {
            number,
            title: format!("post {}", number),
            author: "author".to_string(),
            views: 0,
            link: format!("/p/{}", number),
        }
    }

    #[test]
    fn test_reassemble_sorts_ascending() {
        let posts = vec![post(31), post(2), post(301), post(90)];
        let sorted = reassemble(posts);
        let numbers: Vec<u64> = sorted.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![2, 31, 90, 301]);
    }

    #[test]
    fn test_reassemble_is_permutation_invariant() {
        // Batches can land in any order; the result must not depend on it.
        let batch_a: Vec<Post> = (61..=90).map(post).collect();
        let batch_b: Vec<Post> = (1..=30).map(post).collect();
        let batch_c: Vec<Post> = (31..=60).map(post).collect();

        let mut one_order = Vec::new();
        one_order.extend(batch_a.clone());
        one_order.extend(batch_b.clone());
        one_order.extend(batch_c.clone());

        let mut other_order = Vec::new();
        other_order.extend(batch_c);
        other_order.extend(batch_a);
        other_order.extend(batch_b);

        assert_eq!(reassemble(one_order), reassemble(other_order));
    }

    #[test]
    fn test_reassemble_empty_input() {
        assert!(reassemble(Vec::new()).is_empty());
    }
}
