//! HTTP client for the Polygon REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Polygon API key, sent as the `apiKey` query parameter.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            max_retries: 5,
            base_delay_ms: 500,
            max_delay_ms: 15_000, // Polygon free-tier rate limits reset within a minute
            user_agent: format!("gapline/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with the given API key and defaults
    /// everywhere else.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// Errors that can occur while talking to the aggregates API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server kept failing after all retries.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code of the final attempt.
        status: u16,
    },
}

/// HTTP client with connection reuse and retry logic.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration and the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::with_api_key(api_key))
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a URL and deserializes the JSON response body.
    ///
    /// Retries on server errors (5xx) and rate limiting (429) with
    /// exponential backoff; the API key is appended as a query
    /// parameter on every attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let mut attempts = 0;

        loop {
            let request = self
                .client
                .get(url)
                .query(&[("apiKey", self.config.api_key.as_str())]);

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            tokio::time::sleep(self.backoff_delay(attempts)).await;
                            continue;
                        }
                        return Err(FetchError::ServerError {
                            status: status.as_u16(),
                        });
                    }

                    let response = response.error_for_status()?;
                    return Ok(response.json::<T>().await?);
                }
                Err(e) if is_retryable(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    tokio::time::sleep(self.backoff_delay(attempts)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Exponential backoff capped at `max_delay_ms`, with a small
    /// deterministic jitter so retry trains do not align.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(8));
        let capped = exp.min(self.config.max_delay_ms);
        let jitter = (u64::from(attempt) * 37) % (capped / 4 + 1);
        Duration::from_millis(capped + jitter)
    }
}

/// Determines if a transport error is worth retrying.
fn is_retryable(error: &reqwest::Error) -> bool {
    if error.is_builder() {
        return false;
    }
    error.is_timeout() || error.is_connect() || error.is_request()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_delay_ms, 500);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = ClientConfig::with_api_key("secret");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.max_retries, ClientConfig::default().max_retries);
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = FetchClient::with_api_key("secret");
        assert!(client.is_ok());
    }

    #[test]
    fn test_backoff_delay_grows_and_caps() {
        let client = FetchClient::new(ClientConfig::default()).unwrap();

        let delay1 = client.backoff_delay(1);
        let delay3 = client.backoff_delay(3);
        assert!(delay3 > delay1);

        // High attempt counts stay within max delay plus jitter.
        let delay_high = client.backoff_delay(30);
        assert!(delay_high.as_millis() <= (15_000 + 15_000 / 4) as u128);
    }
}
