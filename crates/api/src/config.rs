//! Client configuration.
//!
//! [`ApiConfig`] is a plain value handed to [`crate::ApiClient::new`]. It is
//! read-only once constructed; nothing in this crate reads the environment.

use crate::ApiError;

/// Backend origin used when no other is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Connection settings for the pickup backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a configuration for the given backend origin.
    ///
    /// A trailing slash is removed so that registry paths (which start with
    /// `/`) join cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `base_url` is not an `http://` or
    /// `https://` URL with a host.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| ApiError::Configuration {
                message: format!("base URL '{raw}' must start with http:// or https://"),
            })?;

        if host.is_empty() {
            return Err(ApiError::Configuration {
                message: format!("base URL '{raw}' has no host"),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Returns the backend origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a registry path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_removed() {
        let config = ApiConfig::new("https://api.example.com/").expect("valid");
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.url("/api/orders"), "https://api.example.com/api/orders");
    }

    #[test]
    fn non_http_urls_are_rejected() {
        for bad in ["localhost:5000", "ftp://example.com", "http://", ""] {
            assert!(
                matches!(ApiConfig::new(bad), Err(ApiError::Configuration { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().url("/api/profile"), "http://localhost:5000/api/profile");
    }
}
