use std::path::PathBuf;

/// Fixed parameters of the listing being scraped
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Listing URL template; the page index is appended to it, and the
    /// template itself (empty page parameter) is the landing page
    pub listing_url: String,

    /// Number of posts the listing shows per page
    pub page_size: u32,

    /// How many times a failed fetch is retried before giving up
    pub fetch_retries: u32,

    /// Where the CSV output is written
    pub output_path: PathBuf,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://www.inven.co.kr/board/ff14/4337?p=".to_string(),
            page_size: 30,
            fetch_retries: 20,
            output_path: PathBuf::from("pages.csv"),
            user_agent: "boardsweep/1.0".to_string(),
        }
    }
}

impl ListingConfig {
    /// Returns the URL of the given listing page
    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}", self.listing_url, page)
    }

    /// Returns the landing page URL (page parameter left empty)
    pub fn landing_url(&self) -> &str {
        &self.listing_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_appends_index() {
        let config = ListingConfig {
            listing_url: "https://example.com/board?p=".to_string(),
            ..ListingConfig::default()
        };
        assert_eq!(config.page_url(7), "https://example.com/board?p=7");
    }

    #[test]
    fn test_landing_url_is_bare_template() {
        let config = ListingConfig::default();
        assert_eq!(config.landing_url(), config.listing_url);
    }
}
