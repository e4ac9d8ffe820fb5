//! Public configuration for the remote catalog client.

use std::time::Duration;

/// Configuration for the remote catalog client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use prodcat_remote::RemoteConfig;
/// use std::time::Duration;
///
/// let config = RemoteConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_limit(50);
/// ```
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the product listing endpoint
    pub(crate) base_url: String,
    /// Maximum number of items to request
    pub(crate) limit: u32,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com/products".to_string(),
            limit: 100,
            user_agent: concat!("prodcat-remote/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl RemoteConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the listing endpoint.
    ///
    /// Defaults to `https://dummyjson.com/products`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the maximum number of items to request per fetch.
    ///
    /// Defaults to 100.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteConfig::new();
        assert_eq!(config.base_url, "https://dummyjson.com/products");
        assert_eq!(config.limit, 100);
        assert!(config.user_agent.contains("prodcat-remote"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RemoteConfig::new()
            .with_base_url("https://custom.api/items")
            .with_limit(25)
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(60))
            .with_max_retries(5);

        assert_eq!(config.base_url, "https://custom.api/items");
        assert_eq!(config.limit, 25);
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 5);
    }
}
