use crate::config::ListingConfig;
use crate::ConfigError;
use url::Url;

/// Validates the listing configuration
pub fn validate(config: &ListingConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.listing_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.listing_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "listing_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.page_size == 0 {
        return Err(ConfigError::Validation(
            "page_size must be at least 1".to_string(),
        ));
    }

    if config.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_path cannot be empty".to_string(),
        ));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&ListingConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_unparsable_url() {
        let config = ListingConfig {
            listing_url: "not a url".to_string(),
            ..ListingConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = ListingConfig {
            listing_url: "ftp://example.com/board?p=".to_string(),
            ..ListingConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let config = ListingConfig {
            page_size: 0,
            ..ListingConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_output_path() {
        let config = ListingConfig {
            output_path: PathBuf::new(),
            ..ListingConfig::default()
        };
        assert!(validate(&config).is_err());
    }
}
