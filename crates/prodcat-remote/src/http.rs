//! HTTP backend abstraction for the listing API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient errors.

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `CatalogSource` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx)
/// and network errors. 4xx responses fail immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend from the client configuration.
    pub fn new(config: &RemoteConfig) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> RemoteResult<reqwest::Response> {
        let mut last_error: Option<RemoteError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.retry_base_delay * 2u32.pow(u32::from(attempt) - 1);
                warn!(attempt, url = %url, "retrying listing API request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(RemoteError::RequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(RemoteError::RequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| RemoteError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// A fake HTTP backend that returns canned JSON responses.
    pub struct FakeBackend {
        responses: Mutex<HashMap<String, serde_json::Value>>,
        fail_with_status: Option<u16>,
    }

    impl FakeBackend {
        /// Create a new fake backend with no canned responses.
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(HashMap::new()),
                fail_with_status: None,
            }
        }

        /// Add a canned response for URLs containing the given substring.
        pub fn with_response(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), json);
            self
        }

        /// Make every request fail with the given HTTP status.
        pub const fn failing_with_status(mut self, status: u16) -> Self {
            self.fail_with_status = Some(status);
            self
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RemoteResult<T> {
            if let Some(status) = self.fail_with_status {
                return Err(RemoteError::RequestFailed {
                    status,
                    url: url.to_string(),
                });
            }

            let json = {
                let responses = self.responses.lock().unwrap();
                responses
                    .iter()
                    .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                    .map(|(_, json)| json.clone())
            };

            let json = json.ok_or_else(|| RemoteError::RequestFailed {
                status: 404,
                url: url.to_string(),
            })?;

            serde_json::from_value(json).map_err(Into::into)
        }
    }
}
